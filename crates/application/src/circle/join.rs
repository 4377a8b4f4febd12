use domain::{
    CircleId, CircleRepository, CircleRepositoryExt, UserId, UserRepository, UserRepositoryExt,
};

use crate::error::Result;

use super::{CircleData, JoinCircleCommand};

/// Adds an existing user to an existing circle, subject to capacity.
pub struct JoinCircleService<U: UserRepository, C: CircleRepository> {
    users: U,
    circles: C,
}

impl<U: UserRepository, C: CircleRepository> JoinCircleService<U, C> {
    /// Creates the service over the given repositories.
    pub fn new(users: U, circles: C) -> Self {
        Self { users, circles }
    }

    /// Joins the user and returns the circle's new read model.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, command: JoinCircleCommand) -> Result<CircleData> {
        let circle_id = CircleId::new(command.circle_id)?;
        let user_id = UserId::new(command.user_id)?;

        let member = self.users.find_by_id(&user_id).await?;
        let mut circle = self.circles.find_by_id(&circle_id).await?;

        circle.join(member.id().clone())?;
        self.circles.update(&circle).await?;

        metrics::counter!("circle_joins_total").increment(1);
        tracing::info!(
            circle_id = %circle_id,
            user_id = %user_id,
            occupancy = circle.occupancy(),
            "user joined circle"
        );

        Ok(CircleData::from(&circle))
    }
}
