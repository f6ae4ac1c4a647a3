pub mod assignment;
pub mod distance;
pub mod error;
pub mod geometry;
pub mod matching;
pub mod models;
pub mod spatial;

pub use assignment::{
    find_assignment_between_points, find_assignment_between_points_with, AssignmentOptions,
};
pub use distance::{build_distance_matrix, build_distance_matrix_with};
pub use error::{GeometryError, MatchingError};
pub use geometry::{
    buffer_polygon, convex_hull, grow_polygon, polar_to_cartesian, scale_polygon,
    simplify_polygon_until_limit,
};
pub use matching::{
    assignment_cost, find_assignment_in_distance_matrix, find_greedy_assignment,
    find_hungarian_assignment, AssignmentReport, MatchingAlgorithm, MatchingOptions,
};
pub use models::{
    Assignment, Coord, DistanceMatrix, DistanceMetric, GeoPoint, Orientation, Planar, Point,
};
pub use spatial::haversine_distance;
