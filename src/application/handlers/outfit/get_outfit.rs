//! GetOutfitHandler - one outfit of the caller, with its garments.

use std::sync::Arc;

use crate::domain::foundation::{OutfitId, UserId};
use crate::domain::outfit::{Outfit, OutfitError};
use crate::ports::OutfitRepository;

#[derive(Debug, Clone)]
pub struct GetOutfitQuery {
    pub owner: UserId,
    pub outfit_id: OutfitId,
}

pub struct GetOutfitHandler {
    outfits: Arc<dyn OutfitRepository>,
}

impl GetOutfitHandler {
    pub fn new(outfits: Arc<dyn OutfitRepository>) -> Self {
        Self { outfits }
    }

    /// Outfits of other users are reported as not found.
    pub async fn handle(&self, query: GetOutfitQuery) -> Result<Outfit, OutfitError> {
        self.outfits
            .find_by_id(query.owner, query.outfit_id)
            .await?
            .ok_or(OutfitError::not_found(query.outfit_id))
    }
}
