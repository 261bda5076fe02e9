// Shared tuning constants for the preview engine and page logic.

// Surface
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 2.0;
pub const POINTER_IDLE: [f32; 2] = [0.5, 0.5];

// Scheduler
pub const MAX_FRAME_DT_SEC: f32 = 0.032; // ~31 fps floor after tab backgrounding

// Physics preview
pub const GRAVITY: f32 = 900.0; // px/s^2
pub const BOUNCE: f32 = 0.78; // restitution on wall contact
pub const MAX_BODIES: usize = 18;
pub const INITIAL_BODIES: usize = 10;
pub const STEER_FORCE: f32 = 60.0; // lateral px/s^2 per unit of pointer offset from centre
pub const BODY_RADIUS_MIN: f32 = 6.0;
pub const BODY_RADIUS_SPAN: f32 = 7.0;
pub const SPAWN_SPEED_X: f32 = 140.0;
pub const SPAWN_SPEED_Y: f32 = 80.0;
pub const DEFAULT_SPAWN_UV: [f32; 2] = [0.5, 0.25];
pub const INITIAL_SPAWN_Y_MIN: f32 = 0.05;
pub const INITIAL_SPAWN_Y_SPAN: f32 = 0.4;
pub const MIN_SEPARATION: f32 = 0.0001;

// Topography preview
pub const RINGS: usize = 54;
pub const TUBE: usize = 22;
pub const SMOOTHING: f32 = 0.04; // per-frame low-pass factor
pub const ANGLE_POINTER_GAIN: f32 = 0.9;
pub const ANGLE_DRIFT_PER_SEC: f32 = 0.2;
pub const CAMERA_Z: f32 = -150.0;
pub const FOCAL_LENGTH: f32 = 420.0;
pub const HORIZON: f32 = 0.52; // vertical screen anchor as a fraction of height
pub const REFERENCE_HZ: f32 = 60.0;

// Palette cycle
pub const PALETTE_PERIOD_SEC: f32 = 3.0;

// Stroke styling
pub const GLOW_WIDTH: f32 = 3.2;
pub const GLOW_ALPHA: f32 = 0.08;
pub const CORE_WIDTH: f32 = 1.3;
pub const CORE_ALPHA: f32 = 0.18;
pub const FOCUS_RADIUS_ACTIVE: f32 = 26.0;
pub const FOCUS_RADIUS_IDLE: f32 = 20.0;

// Theme
pub const THEME_CYCLE_INTERVAL_MS: i32 = 6500;
