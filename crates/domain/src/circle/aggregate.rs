//! Circle aggregate implementation.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};
use crate::user::UserId;

use super::{CircleId, CircleName};

/// Maximum number of people in a circle, owner included.
pub const CIRCLE_CAPACITY: usize = 30;

/// Circle aggregate root.
///
/// A group owned by one user that other users can join. The member list is
/// kept in join order, newest last, and never exceeds
/// `CIRCLE_CAPACITY - 1` entries because the owner takes one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CircleRecord")]
pub struct Circle {
    id: CircleId,
    name: CircleName,
    owner_id: UserId,
    members: Vec<UserId>,
}

/// Wire shape of a circle. Deserialization goes through
/// [`Circle::rehydrate`] so stored or received data obeys the same rules.
#[derive(Deserialize)]
pub struct CircleRecord {
    id: CircleId,
    name: CircleName,
    owner_id: UserId,
    members: Vec<UserId>,
}

impl TryFrom<CircleRecord> for Circle {
    type Error = DomainError;

    fn try_from(record: CircleRecord) -> Result<Self> {
        Circle::rehydrate(record.id, record.name, record.owner_id, record.members)
    }
}

impl Circle {
    /// Creates a new circle under a freshly generated id, with no members.
    pub fn create(name: CircleName, owner_id: UserId) -> Self {
        Self {
            id: CircleId::generate(),
            name,
            owner_id,
            members: Vec::new(),
        }
    }

    /// Rebuilds a circle that already exists in storage.
    ///
    /// Rejects member lists that are over capacity, repeat a user, or
    /// include the owner.
    pub fn rehydrate(
        id: CircleId,
        name: CircleName,
        owner_id: UserId,
        members: Vec<UserId>,
    ) -> Result<Self> {
        if members.len() + 1 > CIRCLE_CAPACITY {
            return Err(DomainError::invalid(
                "circle members",
                format!(
                    "{} members plus owner exceeds capacity {CIRCLE_CAPACITY}",
                    members.len()
                ),
            ));
        }
        for (index, member) in members.iter().enumerate() {
            if *member == owner_id || members[..index].contains(member) {
                return Err(DomainError::invalid(
                    "circle members",
                    format!("user {member} appears more than once"),
                ));
            }
        }

        Ok(Self {
            id,
            name,
            owner_id,
            members,
        })
    }

    /// Returns the circle id.
    pub fn id(&self) -> &CircleId {
        &self.id
    }

    /// Returns the circle name.
    pub fn name(&self) -> &CircleName {
        &self.name
    }

    /// Returns the owner's user id.
    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Returns the members in join order.
    pub fn members(&self) -> &[UserId] {
        &self.members
    }

    /// Returns the number of seats taken, owner included.
    pub fn occupancy(&self) -> usize {
        self.members.len() + 1
    }

    /// Returns true if no one else can join.
    pub fn is_full(&self) -> bool {
        self.occupancy() >= CIRCLE_CAPACITY
    }

    /// Returns true if the user owns or belongs to the circle.
    pub fn is_member(&self, user_id: &UserId) -> bool {
        self.owner_id == *user_id || self.members.contains(user_id)
    }

    /// Adds a member at the end of the list.
    ///
    /// Leaves the circle untouched when it is full or the user is already in it.
    pub fn join(&mut self, user_id: UserId) -> Result<()> {
        if self.is_member(&user_id) {
            return Err(DomainError::AlreadyMember {
                circle_id: self.id.to_string(),
                user_id: user_id.to_string(),
            });
        }
        if self.is_full() {
            return Err(DomainError::CircleFull {
                circle_id: self.id.to_string(),
                capacity: CIRCLE_CAPACITY,
            });
        }

        self.members.push(user_id);
        Ok(())
    }

    /// Renames the circle. Uniqueness is the caller's concern.
    pub fn change_name(&mut self, name: CircleName) {
        self.name = name;
    }

    /// Hands the circle to another user.
    ///
    /// A member promoted to owner leaves the member list so they hold a
    /// single seat. The previous owner does not become a member.
    pub fn change_owner(&mut self, owner_id: UserId) {
        self.members.retain(|member| *member != owner_id);
        self.owner_id = owner_id;
    }
}
