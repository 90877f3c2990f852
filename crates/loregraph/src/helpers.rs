//! Convenience helpers for collaborators and for seeding sample data.
//!
//! Query tools usually receive an identifier that may be either an id or
//! an entity name; [`resolve_entity`] and [`find_path_between`] handle
//! that lookup. The `create_*` functions build the sample campaign graphs
//! used in documentation, demos and tests.

use crate::enforced::SchemaEnforcedStore;
use crate::error::Result;
use crate::graph::{GraphStore, Node, NodeId, PathStep, PropertyMap};
use crate::schema::{EntityType, RelationshipType};
use log::debug;

/// Look up a node by id, falling back to its name.
pub fn resolve_entity<'a>(graph: &'a GraphStore, identifier: &str) -> Option<&'a Node> {
    graph
        .get_node(identifier)
        .or_else(|| graph.get_node_by_name(identifier))
}

/// Shortest path between two entities given by id or name.
///
/// Returns `None` if either identifier does not resolve or no path fits
/// within `max_depth` edges.
pub fn find_path_between<'a>(
    graph: &'a GraphStore,
    start: &str,
    end: &str,
    max_depth: usize,
) -> Option<Vec<PathStep<'a>>> {
    let start = resolve_entity(graph, start)?;
    let end = resolve_entity(graph, end)?;
    graph.find_path(&start.id, &end.id, max_depth)
}

/// Build the base sample graph: two deities, a race, an event and a moon.
///
/// # Errors
///
/// Propagates schema errors; none occur with the bundled data.
pub fn create_example_graph() -> Result<GraphStore> {
    let mut store = SchemaEnforcedStore::default();
    populate_example(&mut store)?;
    Ok(store.into_inner())
}

/// Build the extended sample graph.
///
/// Starts from the base sample and adds Thalindra the Archmage and the
/// Orb of Astral Resonance, linked into the existing entities.
///
/// # Errors
///
/// Propagates schema errors; none occur with the bundled data.
pub fn create_larger_example() -> Result<GraphStore> {
    let mut store = SchemaEnforcedStore::default();
    let base = populate_example(&mut store)?;

    let mage = store.add_entity(
        "Thalindra the Archmage",
        EntityType::Npc,
        PropertyMap::new()
            .with("description", "An ancient elf who has studied the Starcrash for centuries")
            .with("race", "Alfir")
            .with("class_type", "Wizard")
            .with("level", 20i64)
            .with("motivation", "To understand the true nature of astrum magic")
            .with(
                "personality",
                "Curious, methodical, somewhat detached from daily concerns",
            ),
    )?;

    let orb = store.add_entity(
        "Orb of Astral Resonance",
        EntityType::Artifact,
        PropertyMap::new()
            .with("description", "A crystalline sphere that thrums with magical power")
            .with("powers", vec!["Detect magic", "Enhance spellcasting", "Store spells"])
            .with("materials", vec!["Astrum crystal", "Celestial silver"])
            .with("sentience", false),
    )?;

    store.add_relationship(
        "Residence of Thalindra",
        RelationshipType::LocatedIn,
        &mage,
        &base.caierah,
        PropertyMap::new()
            .with(
                "description",
                "Thalindra lives in a tower on the eastern coast of Caierah",
            )
            .with("position", "Eastern Coast")
            .with("permanence", "Centuries"),
    )?;

    store.add_relationship(
        "Racial Heritage",
        RelationshipType::MemberOf,
        &mage,
        &base.alfir,
        PropertyMap::new()
            .with("description", "Thalindra is one of the eldest living Alfir")
            .with("role", "Elder Sage")
            .with("standing", "Highly respected"),
    )?;

    store.add_relationship(
        "Creator of the Orb",
        RelationshipType::Created,
        &mage,
        &orb,
        PropertyMap::new()
            .with("description", "Thalindra created the Orb after decades of research")
            .with("method", "Complex ritual during astral conjunction")
            .with("purpose", "To study the nature of astrum magic"),
    )?;

    let graph = store.into_inner();
    debug!(
        "Built larger example: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Ids from the base sample that the larger sample links to.
struct ExampleIds {
    alfir: NodeId,
    caierah: NodeId,
}

fn populate_example(store: &mut SchemaEnforcedStore) -> Result<ExampleIds> {
    let archos = store.add_entity(
        "Archos",
        EntityType::Deity,
        PropertyMap::new()
            .with("description", "God of Order, Logic, and Law")
            .with("domain", vec!["Order", "Logic", "Law"])
            .with("pantheon", "Archosian Pantheon"),
    )?;

    let nef = store.add_entity(
        "Nef",
        EntityType::Deity,
        PropertyMap::new()
            .with("description", "Goddess of Freedom, Creativity, and Chaos")
            .with("domain", vec!["Freedom", "Creativity", "Chaos"])
            .with("pantheon", "Nef Pantheon"),
    )?;

    let alfir = store.add_entity(
        "Alfir",
        EntityType::Race,
        PropertyMap::new()
            .with("description", "The original elven race created by the Uthra")
            .with(
                "origin",
                "Created by the Uthra using material components of Caierah",
            )
            .with("traits", vec!["Balanced magic", "Connection to nature"])
            .with("subraces", vec!["Elves", "Drow"]),
    )?;

    let starcrash = store.add_entity(
        "The Starcrash",
        EntityType::Event,
        PropertyMap::new()
            .with("description", "Meteoric impact of pure astrum that created magic")
            .with("date", PropertyMap::new().with("YA", "1 million years ago"))
            .with("significance", "Introduced magic to the material universe"),
    )?;

    let caierah = store.add_entity(
        "Caierah",
        EntityType::Location,
        PropertyMap::new()
            .with("description", "The moon where the main campaign takes place")
            .with("location_type", "Moon")
            .with("population", "Varied civilizations")
            .with(
                "points_of_interest",
                vec!["Thraxus", "Meridia", "Thuskara", "Osoth", "Iberon"],
            ),
    )?;

    store.add_relationship(
        "Twin Gods Creation",
        RelationshipType::ParentOf,
        &archos,
        &nef,
        PropertyMap::new()
            .with("description", "The cosmic relationship between the twin gods")
            .with("relationship_type", "Divine twins"),
    )?;

    store.add_relationship(
        "Magic Origin",
        RelationshipType::Created,
        &starcrash,
        &caierah,
        PropertyMap::new()
            .with("description", "The Starcrash created magic on Caierah")
            .with("method", "Meteoric impact of pure astrum"),
    )?;

    Ok(ExampleIds { alfir, caierah })
}
