//! SetFavoriteHandler - flag or unflag an outfit as favorite.

use std::sync::Arc;

use crate::domain::foundation::{OutfitId, UserId};
use crate::domain::outfit::{Outfit, OutfitError};
use crate::ports::OutfitRepository;

/// Command to change an outfit's favorite flag.
#[derive(Debug, Clone)]
pub struct SetFavoriteCommand {
    pub owner: UserId,
    pub outfit_id: OutfitId,
    pub favorite: bool,
}

/// Handler for toggling favorites.
pub struct SetFavoriteHandler {
    outfits: Arc<dyn OutfitRepository>,
}

impl SetFavoriteHandler {
    pub fn new(outfits: Arc<dyn OutfitRepository>) -> Self {
        Self { outfits }
    }

    pub async fn handle(&self, cmd: SetFavoriteCommand) -> Result<Outfit, OutfitError> {
        self.outfits
            .set_favorite(cmd.owner, cmd.outfit_id, cmd.favorite)
            .await?
            .ok_or(OutfitError::not_found(cmd.outfit_id))
    }
}
