use super::{decode, Amenity, BaseModel, City, Model, Place, Review, State, User};
use crate::storage::{Attributes, StorageError, StorageResult};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The closed set of model type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    BaseModel,
    User,
    State,
    City,
    Amenity,
    Place,
    Review,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::BaseModel,
        EntityKind::User,
        EntityKind::State,
        EntityKind::City,
        EntityKind::Amenity,
        EntityKind::Place,
        EntityKind::Review,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BaseModel => "BaseModel",
            Self::User => "User",
            Self::State => "State",
            Self::City => "City",
            Self::Amenity => "Amenity",
            Self::Place => "Place",
            Self::Review => "Review",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| StorageError::UnknownClass(s.to_string()))
    }
}

/// Any model, tagged by its type.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    BaseModel(BaseModel),
    User(User),
    State(State),
    City(City),
    Amenity(Amenity),
    Place(Place),
    Review(Review),
}

impl Entity {
    /// Fresh instance of `kind` with a new id and timestamps.
    pub fn new(kind: EntityKind) -> Self {
        match kind {
            EntityKind::BaseModel => Self::BaseModel(BaseModel::new()),
            EntityKind::User => Self::User(User::new()),
            EntityKind::State => Self::State(State::new()),
            EntityKind::City => Self::City(City::new()),
            EntityKind::Amenity => Self::Amenity(Amenity::new()),
            EntityKind::Place => Self::Place(Place::new()),
            EntityKind::Review => Self::Review(Review::new()),
        }
    }

    /// Rebuilds a typed model from the mapping the store holds for it.
    pub fn from_attributes(kind: EntityKind, attrs: &Attributes) -> StorageResult<Self> {
        Ok(match kind {
            EntityKind::BaseModel => Self::BaseModel(decode(attrs)?),
            EntityKind::User => Self::User(decode(attrs)?),
            EntityKind::State => Self::State(decode(attrs)?),
            EntityKind::City => Self::City(decode(attrs)?),
            EntityKind::Amenity => Self::Amenity(decode(attrs)?),
            EntityKind::Place => Self::Place(decode(attrs)?),
            EntityKind::Review => Self::Review(decode(attrs)?),
        })
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::BaseModel(_) => EntityKind::BaseModel,
            Self::User(_) => EntityKind::User,
            Self::State(_) => EntityKind::State,
            Self::City(_) => EntityKind::City,
            Self::Amenity(_) => EntityKind::Amenity,
            Self::Place(_) => EntityKind::Place,
            Self::Review(_) => EntityKind::Review,
        }
    }

    pub fn set(&mut self, name: &str, value: Value) -> StorageResult<()> {
        match self {
            Self::BaseModel(m) => m.set(name, value),
            Self::User(m) => m.set(name, value),
            Self::State(m) => m.set(name, value),
            Self::City(m) => m.set(name, value),
            Self::Amenity(m) => m.set(name, value),
            Self::Place(m) => m.set(name, value),
            Self::Review(m) => m.set(name, value),
        }
    }

    fn as_model(&self) -> &dyn Model {
        match self {
            Self::BaseModel(m) => m,
            Self::User(m) => m,
            Self::State(m) => m,
            Self::City(m) => m,
            Self::Amenity(m) => m,
            Self::Place(m) => m,
            Self::Review(m) => m,
        }
    }

    fn as_model_mut(&mut self) -> &mut dyn Model {
        match self {
            Self::BaseModel(m) => m,
            Self::User(m) => m,
            Self::State(m) => m,
            Self::City(m) => m,
            Self::Amenity(m) => m,
            Self::Place(m) => m,
            Self::Review(m) => m,
        }
    }
}

impl Model for Entity {
    fn type_name(&self) -> &'static str {
        self.as_model().type_name()
    }

    fn attributes(&self) -> Attributes {
        self.as_model().attributes()
    }

    fn base(&self) -> &BaseModel {
        self.as_model().base()
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        self.as_model_mut().base_mut()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
#[path = "tests/entity_tests.rs"]
mod tests;
