use domain::{CircleId, CircleRepository, CircleRepositoryExt};

use crate::error::Result;

use super::{CircleData, GetCircleCommand};

/// Fetches a single circle.
pub struct GetCircleService<C: CircleRepository> {
    circles: C,
}

impl<C: CircleRepository> GetCircleService<C> {
    /// Creates the service over the given circle repository.
    pub fn new(circles: C) -> Self {
        Self { circles }
    }

    /// Returns the circle or `NotFound`.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, command: GetCircleCommand) -> Result<CircleData> {
        let id = CircleId::new(command.id)?;
        let circle = self.circles.find_by_id(&id).await?;
        Ok(CircleData::from(&circle))
    }
}
