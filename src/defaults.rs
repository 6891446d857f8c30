//! Default recognizer settings

/// Points per normalized path.
pub const SAMPLE_COUNT: usize = 64;
/// Side of the reference square paths are scaled into.
pub const SQUARE_SIZE: f64 = 250.0;
/// Half-width of the rotation search window, in degrees.
pub const ANGLE_RANGE_DEGREES: f64 = 45.0;
/// Golden-section search stops once the window is this narrow, in degrees.
pub const ANGLE_PRECISION_DEGREES: f64 = 2.0;
/// Bounding-box axes thinner than this fraction of the wider axis are not scaled.
pub const FLAT_AXIS_RATIO: f64 = 1e-9;
/// A normalized path's centroid may sit this fraction of the square size off the origin.
pub const CENTROID_TOLERANCE: f64 = 1e-6;
