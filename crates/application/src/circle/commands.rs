//! Circle commands.

/// Command to register a new circle owned by an existing user.
#[derive(Debug, Clone)]
pub struct RegisterCircleCommand {
    /// The user who will own the circle.
    pub owner_id: String,

    /// Requested circle name.
    pub name: String,
}

impl RegisterCircleCommand {
    /// Creates a new RegisterCircleCommand.
    pub fn new(owner_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            name: name.into(),
        }
    }
}

/// Command to look a circle up by id.
#[derive(Debug, Clone)]
pub struct GetCircleCommand {
    /// The circle to fetch.
    pub id: String,
}

impl GetCircleCommand {
    /// Creates a new GetCircleCommand.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Command to rename a circle, hand it over, and/or add members.
#[derive(Debug, Clone)]
pub struct UpdateCircleCommand {
    /// The circle to update.
    pub id: String,

    /// New name, if it should change.
    pub name: Option<String>,

    /// New owner, if it should change.
    pub owner_id: Option<String>,

    /// Users to add as members, in join order.
    pub member_ids: Vec<String>,
}

impl UpdateCircleCommand {
    /// Creates an update that changes nothing yet.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            owner_id: None,
            member_ids: Vec::new(),
        }
    }

    /// Sets the new name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new owner.
    pub fn with_owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Adds users to join, after any already queued.
    pub fn with_members<I, S>(mut self, member_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.member_ids
            .extend(member_ids.into_iter().map(Into::into));
        self
    }
}

/// Command to delete a circle.
#[derive(Debug, Clone)]
pub struct DeleteCircleCommand {
    /// The circle to delete.
    pub id: String,
}

impl DeleteCircleCommand {
    /// Creates a new DeleteCircleCommand.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Command for a user to join a circle.
#[derive(Debug, Clone)]
pub struct JoinCircleCommand {
    /// The circle to join.
    pub circle_id: String,

    /// The joining user.
    pub user_id: String,
}

impl JoinCircleCommand {
    /// Creates a new JoinCircleCommand.
    pub fn new(circle_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            circle_id: circle_id.into(),
            user_id: user_id.into(),
        }
    }
}
