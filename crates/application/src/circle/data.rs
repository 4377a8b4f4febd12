use domain::Circle;
use serde::Serialize;

/// Read model of a circle handed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CircleData {
    id: String,
    name: String,
    owner_id: String,
    member_ids: Vec<String>,
}

impl CircleData {
    /// Returns the circle id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the circle name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owner's user id.
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// Returns member ids in join order.
    pub fn member_ids(&self) -> &[String] {
        &self.member_ids
    }
}

impl From<&Circle> for CircleData {
    fn from(circle: &Circle) -> Self {
        Self {
            id: circle.id().value().to_string(),
            name: circle.name().value().to_string(),
            owner_id: circle.owner_id().value().to_string(),
            member_ids: circle
                .members()
                .iter()
                .map(|member| member.value().to_string())
                .collect(),
        }
    }
}
