// Layout and motion constants for the card stack.

/// Horizontal release distance past which a drag becomes a dismissal
pub const SWIPE_THRESHOLD: f32 = 100.0;

/// How many cards of the visible queue are mounted at once
pub const MAX_RENDERED_CARDS: usize = 4;

/// Width of the stack column in logical pixels
pub const STACK_WIDTH: f32 = 480.0;

/// Maximum height of the stack area
pub const STACK_MAX_HEIGHT: f32 = 700.0;

/// Per-position offsets applied to cards behind the front one
pub mod stack {
    /// Vertical shift per stack position
    pub const CARD_OFFSET: f32 = 20.0;

    /// Scale lost per stack position
    pub const SCALE_STEP: f32 = 0.05;

    /// Opacity lost per stack position
    pub const OPACITY_STEP: f32 = 0.2;
}

/// Drag and exit motion
pub mod motion {
    /// Share of pointer travel the dragged card follows
    pub const DRAG_ELASTIC: f32 = 0.7;

    /// Sideways distance travelled by a dismissed card
    pub const EXIT_DISTANCE: f32 = 200.0;

    /// Duration of exit and spring-back animations, seconds
    pub const DURATION: f64 = 0.3;
}

/// Card-specific layout constants
pub mod card {
    /// Height of the header image area
    pub const HEADER_HEIGHT: f32 = 256.0;

    /// Border radius of card corners
    pub const ROUNDING: f32 = 12.0;

    /// Body padding
    pub const PADDING: f32 = 16.0;

    /// Source badge rounding
    pub const BADGE_ROUNDING: f32 = 4.0;

    /// Height reserved for the Back / AI Insights controls row
    pub const CONTROLS_HEIGHT: f32 = 28.0;
}

/// UI spacing constants
pub mod spacing {
    /// Small spacing (4px)
    pub const SMALL: f32 = 4.0;

    /// Medium spacing (8px)
    pub const MEDIUM: f32 = 8.0;

    /// Large spacing (16px)
    pub const LARGE: f32 = 16.0;

    /// Extra large spacing (24px)
    pub const XLARGE: f32 = 24.0;
}
