//! ListOutfitsHandler - query a user's outfits by day, type and favorite flag.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::outfit::{Outfit, OutfitError, OutfitFilter};
use crate::ports::OutfitRepository;

/// Query for a user's outfits; an empty filter lists all of them.
#[derive(Debug, Clone)]
pub struct ListOutfitsQuery {
    pub owner: UserId,
    pub filter: OutfitFilter,
}

/// Handler for filtered outfit listings.
pub struct ListOutfitsHandler {
    outfits: Arc<dyn OutfitRepository>,
}

impl ListOutfitsHandler {
    pub fn new(outfits: Arc<dyn OutfitRepository>) -> Self {
        Self { outfits }
    }

    pub async fn handle(&self, query: ListOutfitsQuery) -> Result<Vec<Outfit>, OutfitError> {
        let outfits = self
            .outfits
            .list_filtered(query.owner, &query.filter)
            .await?;
        Ok(outfits)
    }
}
