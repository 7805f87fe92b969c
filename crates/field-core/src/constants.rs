// Tuning constants for the particle field. `FieldConfig::default()` is built
// from these; the web front-end only overrides grid spacing.

// Grid layout
pub const GRID_SPACING: f32 = 50.0; // px between neighbouring anchors
pub const PARTICLE_RADIUS: f32 = 2.0;
pub const DENSITY_MIN: f32 = 1.0; // density is drawn from [MIN, MAX)
pub const DENSITY_MAX: f32 = 31.0;
pub const MAX_PARTICLES: usize = 200_000; // regrid truncates rows beyond this

// Pointer interaction
pub const MOUSE_RADIUS: f32 = 120.0; // px; particles closer than this are repelled
pub const RELAX_DIVISOR: f32 = 10.0; // offset shrinks by 1/10 per frame
pub const RELAX_SNAP_EPSILON: f32 = 0.01; // px; below this the particle lands on its anchor

// Connections
pub const CONNECTION_DISTANCE_SQ: f32 = 3500.0; // squared px, roughly 59px
pub const CONNECTION_ALPHA: f32 = 0.3; // opacity of a zero-length link
pub const CONNECTION_LINE_WIDTH: f32 = 1.0;

// Cursor
pub const POINTER_SMOOTHING: f32 = 0.15; // new = old + (raw - old) * k
pub const TRAIL_LEN: usize = 20;
pub const TRAIL_DOT_RADIUS: f32 = 2.0;
pub const TRAIL_DOT_RADIUS_STEP: f32 = 0.1; // newer dots are slightly larger
pub const TRAIL_ALPHA: f32 = 0.4; // opacity of the newest trail dot
pub const CURSOR_RADIUS: f32 = 4.0;
pub const CURSOR_GLOW_BLUR: f32 = 10.0;
