//! Entity and relationship type tags for campaign knowledge graphs.
//!
//! Both sets are closed: adding a variant is a compile-time change. Tags
//! serialize as SCREAMING_SNAKE_CASE strings (`"PARTY_MEMBER"`), which is
//! also what [`FromStr`] accepts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type of an entity (node) in the campaign graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    // Lore entities
    /// A god or divine power
    Deity,
    /// A people or species
    Race,
    /// A place, from a tavern to a moon
    Location,
    /// Something that happened
    Event,
    /// A span of history
    Era,
    /// A notable object
    Artifact,
    /// An idea, school of magic or belief
    Concept,
    /// A plane of existence
    Plane,

    // Gameplay entities
    /// Non-player character
    Npc,
    /// Guild, kingdom, cult or other organization
    Faction,
    /// Antagonist with an agenda
    Villain,
    /// Creature the party may fight
    Monster,
    /// A player character
    PartyMember,
    /// A task the party can take on
    Quest,
    /// Merchant or service provider
    Shop,
    /// Loot and hoards
    Treasure,
    /// A played game session
    Session,
}

impl EntityType {
    /// Every entity type, in declaration order.
    pub const ALL: [EntityType; 17] = [
        EntityType::Deity,
        EntityType::Race,
        EntityType::Location,
        EntityType::Event,
        EntityType::Era,
        EntityType::Artifact,
        EntityType::Concept,
        EntityType::Plane,
        EntityType::Npc,
        EntityType::Faction,
        EntityType::Villain,
        EntityType::Monster,
        EntityType::PartyMember,
        EntityType::Quest,
        EntityType::Shop,
        EntityType::Treasure,
        EntityType::Session,
    ];

    /// The wire tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Deity => "DEITY",
            EntityType::Race => "RACE",
            EntityType::Location => "LOCATION",
            EntityType::Event => "EVENT",
            EntityType::Era => "ERA",
            EntityType::Artifact => "ARTIFACT",
            EntityType::Concept => "CONCEPT",
            EntityType::Plane => "PLANE",
            EntityType::Npc => "NPC",
            EntityType::Faction => "FACTION",
            EntityType::Villain => "VILLAIN",
            EntityType::Monster => "MONSTER",
            EntityType::PartyMember => "PARTY_MEMBER",
            EntityType::Quest => "QUEST",
            EntityType::Shop => "SHOP",
            EntityType::Treasure => "TREASURE",
            EntityType::Session => "SESSION",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for EntityType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for EntityType {
    type Err = UnknownTypeTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTypeTag(s.to_string()))
    }
}

/// Type of a directed relationship (edge) between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    // Lore relationships
    /// Source brought target into being
    Created,
    /// Source destroyed target
    Destroyed,
    /// Source has authority over target
    Rules,
    /// Source event led to target
    Caused,
    /// Source is physically within target
    LocatedIn,
    /// Source belongs to target group
    MemberOf,
    /// Source changed into target
    TransformedInto,
    /// Source is the parent of target
    ParentOf,
    /// Source event happened during target era
    OccurredDuring,
    /// Physical or metaphysical link
    ConnectedTo,

    // Social relationships
    /// Friendly
    AllyOf,
    /// Hostile
    EnemyOf,
    /// Knows, but not closely
    AcquaintedWith,
    /// Blood or similar bond
    FamilyOf,
    /// Works for or obeys
    Serves,
    /// Commands or directs
    Leads,
    /// Guards or defends
    Protects,
    /// Poses a danger to
    Threatens,
    /// Employed for a task
    Hired,
    /// Saved from danger
    Rescued,
    /// Overcame in combat or contest
    Defeated,
    /// Finished a task or quest
    Completed,
    /// Holds hidden knowledge about
    KnowsSecretAbout,
    /// Indebted to
    OwesFavorTo,
    /// Wary of
    Distrusts,
    /// Provides goods or services to
    SellsTo,
    /// Trains or educates
    Teaches,
}

impl RelationshipType {
    /// Every relationship type, in declaration order.
    pub const ALL: [RelationshipType; 27] = [
        RelationshipType::Created,
        RelationshipType::Destroyed,
        RelationshipType::Rules,
        RelationshipType::Caused,
        RelationshipType::LocatedIn,
        RelationshipType::MemberOf,
        RelationshipType::TransformedInto,
        RelationshipType::ParentOf,
        RelationshipType::OccurredDuring,
        RelationshipType::ConnectedTo,
        RelationshipType::AllyOf,
        RelationshipType::EnemyOf,
        RelationshipType::AcquaintedWith,
        RelationshipType::FamilyOf,
        RelationshipType::Serves,
        RelationshipType::Leads,
        RelationshipType::Protects,
        RelationshipType::Threatens,
        RelationshipType::Hired,
        RelationshipType::Rescued,
        RelationshipType::Defeated,
        RelationshipType::Completed,
        RelationshipType::KnowsSecretAbout,
        RelationshipType::OwesFavorTo,
        RelationshipType::Distrusts,
        RelationshipType::SellsTo,
        RelationshipType::Teaches,
    ];

    /// The wire tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Created => "CREATED",
            RelationshipType::Destroyed => "DESTROYED",
            RelationshipType::Rules => "RULES",
            RelationshipType::Caused => "CAUSED",
            RelationshipType::LocatedIn => "LOCATED_IN",
            RelationshipType::MemberOf => "MEMBER_OF",
            RelationshipType::TransformedInto => "TRANSFORMED_INTO",
            RelationshipType::ParentOf => "PARENT_OF",
            RelationshipType::OccurredDuring => "OCCURRED_DURING",
            RelationshipType::ConnectedTo => "CONNECTED_TO",
            RelationshipType::AllyOf => "ALLY_OF",
            RelationshipType::EnemyOf => "ENEMY_OF",
            RelationshipType::AcquaintedWith => "ACQUAINTED_WITH",
            RelationshipType::FamilyOf => "FAMILY_OF",
            RelationshipType::Serves => "SERVES",
            RelationshipType::Leads => "LEADS",
            RelationshipType::Protects => "PROTECTS",
            RelationshipType::Threatens => "THREATENS",
            RelationshipType::Hired => "HIRED",
            RelationshipType::Rescued => "RESCUED",
            RelationshipType::Defeated => "DEFEATED",
            RelationshipType::Completed => "COMPLETED",
            RelationshipType::KnowsSecretAbout => "KNOWS_SECRET_ABOUT",
            RelationshipType::OwesFavorTo => "OWES_FAVOR_TO",
            RelationshipType::Distrusts => "DISTRUSTS",
            RelationshipType::SellsTo => "SELLS_TO",
            RelationshipType::Teaches => "TEACHES",
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for RelationshipType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for RelationshipType {
    type Err = UnknownTypeTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationshipType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTypeTag(s.to_string()))
    }
}

/// A type tag that names no known entity or relationship type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTypeTag(pub String);

impl fmt::Display for UnknownTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown type tag: {}", self.0)
    }
}

impl std::error::Error for UnknownTypeTag {}
