//! Static type registry: which tags exist and which pairings are allowed.
//!
//! Connection rules are declared only for a curated subset of relationship
//! types. A relationship type without a rule accepts any source/target
//! pairing.

use super::types::{EntityType, RelationshipType};

/// Permitted endpoint types for a restricted relationship type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionRule {
    /// Entity types allowed at the source end
    pub valid_sources: &'static [EntityType],
    /// Entity types allowed at the target end
    pub valid_targets: &'static [EntityType],
}

impl ConnectionRule {
    /// Whether `source_type` may start this relationship.
    pub fn allows_source(&self, source_type: EntityType) -> bool {
        self.valid_sources.contains(&source_type)
    }

    /// Whether `target_type` may end this relationship.
    pub fn allows_target(&self, target_type: EntityType) -> bool {
        self.valid_targets.contains(&target_type)
    }
}

static CREATED_RULE: ConnectionRule = ConnectionRule {
    valid_sources: &[
        EntityType::Deity,
        EntityType::Npc,
        EntityType::Faction,
        EntityType::Event,
    ],
    valid_targets: &[
        EntityType::Race,
        EntityType::Location,
        EntityType::Artifact,
        EntityType::Npc,
        EntityType::Monster,
    ],
};

static DESTROYED_RULE: ConnectionRule = ConnectionRule {
    valid_sources: &[
        EntityType::Deity,
        EntityType::Npc,
        EntityType::Faction,
        EntityType::Event,
        EntityType::Monster,
        EntityType::PartyMember,
    ],
    valid_targets: &[
        EntityType::Location,
        EntityType::Artifact,
        EntityType::Npc,
        EntityType::Faction,
    ],
};

/// Whether `tag` names a known entity type.
pub fn is_valid_entity_type(tag: &str) -> bool {
    tag.parse::<EntityType>().is_ok()
}

/// Whether `tag` names a known relationship type.
pub fn is_valid_relationship_type(tag: &str) -> bool {
    tag.parse::<RelationshipType>().is_ok()
}

/// The connection rule for `relationship_type`, or `None` if unrestricted.
pub fn allowed_connections(relationship_type: RelationshipType) -> Option<&'static ConnectionRule> {
    match relationship_type {
        RelationshipType::Created => Some(&CREATED_RULE),
        RelationshipType::Destroyed => Some(&DESTROYED_RULE),
        _ => None,
    }
}

/// Relationship types that carry a connection rule.
pub fn restricted_relationship_types() -> impl Iterator<Item = RelationshipType> {
    RelationshipType::ALL
        .into_iter()
        .filter(|t| allowed_connections(*t).is_some())
}

/// Property keys every entity type is expected to carry.
pub const BASE_PROPERTIES: &[&str] = &[
    "description",
    "creation_date",
    "last_updated",
    "canonical_id",
    "information_source",
    "image_url",
    "campaign_notes",
    "player_knowledge",
];

/// Suggested property keys for an entity type, beyond [`BASE_PROPERTIES`].
///
/// Advisory only. Stores never check property content; this exists so
/// ingestion and UI layers agree on naming.
pub fn advisory_properties(entity_type: EntityType) -> &'static [&'static str] {
    match entity_type {
        EntityType::Deity => &[
            "domain", "pantheon", "alignment", "symbol", "holy_days", "clergy_title",
            "associated_plane",
        ],
        EntityType::Race => &[
            "origin", "traits", "lifespan", "homeland", "language", "subraces",
            "racial_abilities",
        ],
        EntityType::Location => &[
            "location_type", "population", "government", "climate", "resources", "dangers",
            "points_of_interest", "maps", "accessibility", "coordinates",
        ],
        EntityType::Event => &[
            "date", "duration", "participants", "outcome", "significance", "witnesses",
            "historical_evidence",
        ],
        EntityType::Era => &[
            "start_date", "end_date", "defining_events", "societal_changes",
            "technological_level", "preceding_era", "following_era",
        ],
        EntityType::Artifact => &[
            "creator", "materials", "powers", "current_location", "previous_owners",
            "sentience", "alignment", "destruction_method", "game_mechanics",
        ],
        EntityType::Concept => &[
            "category", "practitioners", "origin", "limitations", "related_concepts",
            "applications", "variations",
        ],
        EntityType::Plane => &[
            "plane_type", "physical_laws", "inhabitants", "entry_points", "hazards",
            "affinity", "parent_plane",
        ],
        EntityType::Npc => &[
            "race", "class_type", "level", "occupation", "current_location", "motivation",
            "secrets", "personality", "appearance", "possessions", "stats", "quest_giver",
            "first_appearance",
        ],
        EntityType::Faction => &[
            "faction_type", "headquarters", "leader", "influence", "resources", "goals",
            "territory", "allies", "enemies", "members", "hierarchy", "founding_date",
            "reputation", "symbol",
        ],
        EntityType::Villain => &[
            "villain_type", "threat_level", "motivation", "methods", "minions",
            "weaknesses", "base", "schemes", "backstory", "stats", "escape_plans",
        ],
        EntityType::Monster => &[
            "monster_type", "challenge_rating", "habitat", "behavior", "abilities",
            "weaknesses", "loot", "diet", "variants", "stats", "encounter_tables",
        ],
        EntityType::PartyMember => &[
            "player", "race", "class_type", "level", "background", "goals", "connections",
            "character_sheet", "favorite_tactics", "personality_traits", "personal_quests",
        ],
        EntityType::Quest => &[
            "quest_type", "quest_giver", "objectives", "rewards", "difficulty", "status",
            "location", "prerequisites", "follow_up", "time_sensitive", "hidden_outcome",
        ],
        EntityType::Shop => &[
            "shop_type", "owner", "location", "inventory", "prices", "quality", "specialty",
            "haggling", "schedule", "services",
        ],
        EntityType::Treasure => &[
            "treasure_type", "value", "location", "guardian", "origin", "curse",
            "detection", "legal_status", "special_properties",
        ],
        EntityType::Session => &[
            "session_number", "date_played", "summary", "locations_visited",
            "npcs_encountered", "quests_advanced", "quests_completed", "treasure_found",
            "combat_encounters", "player_decisions", "plot_revelations",
        ],
    }
}
