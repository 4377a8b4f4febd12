use domain::{CircleId, CircleRepository, RepositoryError};

use crate::error::Result;

use super::DeleteCircleCommand;

/// Deletes a circle. Deleting a circle that does not exist succeeds.
pub struct DeleteCircleService<C: CircleRepository> {
    circles: C,
}

impl<C: CircleRepository> DeleteCircleService<C> {
    /// Creates the service over the given circle repository.
    pub fn new(circles: C) -> Self {
        Self { circles }
    }

    /// Removes the circle if present.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, command: DeleteCircleCommand) -> Result<()> {
        let id = CircleId::new(command.id)?;

        match self.circles.delete(&id).await {
            Ok(()) => {
                metrics::counter!("entity_deletes_total", "entity" => "circle", "outcome" => "deleted")
                    .increment(1);
                tracing::info!(circle_id = %id, "circle deleted");
                Ok(())
            }
            Err(RepositoryError::NotFound { .. }) => {
                metrics::counter!("entity_deletes_total", "entity" => "circle", "outcome" => "absent")
                    .increment(1);
                tracing::warn!(circle_id = %id, "circle already absent, nothing to delete");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
