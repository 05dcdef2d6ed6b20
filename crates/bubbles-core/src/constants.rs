// Shared tuning constants for the bubble simulation, voting and label fitting.

// Growth curve
pub const BASE_RADIUS: f32 = 30.0;
pub const SQRT_COEFF: f32 = 12.0; // sqrt growth
pub const EARLY_BOOST: f32 = 1.25; // extra linear growth for the first votes
pub const EARLY_BOOST_CAP: u32 = 12; // votes after which the linear term saturates

// Initial motion (pixels per tick)
pub const INIT_SPEED_MIN: f32 = 7.0;
pub const INIT_SPEED_MAX: f32 = 12.0;

// Vote kick
pub const KICK_BASE: f32 = 14.0;
pub const KICK_VARIANCE: f32 = 9.0;
pub const KICK_JITTER_RAD: f32 = std::f32::consts::PI / 5.0; // ±36°
pub const KICK_SCALE_MIN: f32 = 0.65; // floor for the size scale
pub const KICK_SCALE_REF_RADIUS: f32 = 52.0; // sizeScale = ref / (r + 1)

// Pointer drag
pub const DRAG_STIFFNESS: f32 = 0.2; // fraction of the gap to the pointer closed per tick

// Idle watchdog
pub const IDLE_SPEED_SQ: f32 = 0.0005;
pub const IDLE_NUDGE_SPEED: f32 = 1.8;

// Material
pub const RESTITUTION: f32 = 0.95;
pub const FRICTION: f32 = 0.0005;
pub const AIR_DRAG: f32 = 0.014; // fraction of velocity lost per tick

// World stepping
pub const TICK_HZ: f32 = 60.0;

// Arena
pub const ARENA_WIDTH: f32 = 960.0;
pub const ARENA_HEIGHT: f32 = 560.0;
pub const WALL_THICKNESS: f32 = 60.0;
pub const SPAWN_RING_FRACTION: f32 = 0.33; // of the shorter arena side
pub const SPAWN_RING_INSET: f32 = 0.9;

// Label fitting
pub const LABEL_WIDTH_FACTOR: f32 = 1.6; // ~80% of the diameter
pub const LABEL_HEIGHT_FACTOR: f32 = 1.3; // ~65% of the diameter
pub const LABEL_MAX_LINES: usize = 3;
pub const LABEL_FONT_RATIO: f32 = 0.30; // font cap relative to radius
pub const LABEL_FONT_VOTE_BOOST: f32 = 0.25; // extra px per early vote
pub const LABEL_MIN_FONT_PX: u32 = 8;
pub const LABEL_LINE_GAP_PX: u32 = 2;

// Persistence
pub const STORAGE_KEY: &str = "matter_bubbles_votes_v5";

// Export
pub const CSV_HEADER: [&str; 3] = ["genre_key", "genre_label", "votes"];
pub const CSV_MIME: &str = "text/csv;charset=utf-8";
pub const EXPORT_FILE_PREFIX: &str = "genre_votes_";
