use domain::{
    CIRCLE_ENTITY, Circle, CircleKey, CircleName, CircleRepository, CircleUniquenessService,
    UserId, UserRepository, UserRepositoryExt,
};

use crate::error::{ApplicationError, Result};

use super::{CircleData, RegisterCircleCommand};

/// Registers a circle for an existing owner under a free name.
pub struct RegisterCircleService<U: UserRepository, C: CircleRepository> {
    users: U,
    circles: C,
    uniqueness: CircleUniquenessService<C>,
}

impl<U: UserRepository, C: CircleRepository + Clone> RegisterCircleService<U, C> {
    /// Creates the service over the given repositories.
    pub fn new(users: U, circles: C) -> Self {
        Self {
            users,
            uniqueness: CircleUniquenessService::new(circles.clone()),
            circles,
        }
    }

    /// Registers the circle and returns its read model.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, command: RegisterCircleCommand) -> Result<CircleData> {
        let owner_id = UserId::new(command.owner_id)?;
        let name = CircleName::new(command.name)?;

        let owner = self
            .users
            .find_by_id(&owner_id)
            .await
            .map_err(|e| ApplicationError::from(e).for_entity("owner"))?;

        if !self.uniqueness.unique_name(&name).await? {
            return Err(ApplicationError::duplicate(
                CIRCLE_ENTITY,
                CircleKey::Name(name),
            ));
        }

        let circle = Circle::create(name, owner.id().clone());
        self.circles.create(&circle).await?;

        metrics::counter!("circles_registered_total").increment(1);
        tracing::info!(circle_id = %circle.id(), owner_id = %owner.id(), "circle registered");

        Ok(CircleData::from(&circle))
    }
}
