mod add_player_form;
mod drag_overlay;
mod error_banner;
mod player_card;
mod team_column;

pub use add_player_form::AddPlayerForm;
pub use drag_overlay::DragOverlay;
pub use error_banner::ErrorBanner;
pub use player_card::PlayerCard;
pub use team_column::TeamColumn;
