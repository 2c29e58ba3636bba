//! Render projection of the board
//!
//! Everything the UI shows is derived from the latest `ActivityCatalog`
//! through [`BoardView::project`]. Components never read the catalog
//! directly.

mod board_view;

pub use board_view::{
    confirm_removal_prompt, ActivityCard, BoardView, ListState, ParticipantList, ParticipantRow,
    LOADING_TEXT, LOAD_FAILED_TEXT, NO_PARTICIPANTS_TEXT, SELECT_PLACEHOLDER_TEXT,
};
