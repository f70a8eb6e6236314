use bevy_ecs::prelude::Component;

/// Tag naming the kind of an entity ("player", "platform", "floor", "enemy", "coin").
#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Group(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}
