//! Concurrent access through SharedGraph

use loregraph::{PropertyMap, SharedGraph};
use std::thread;

#[test]
fn test_concurrent_writers_and_readers() {
    let shared = SharedGraph::default();

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    shared
                        .write(|store| {
                            store.add_entity(format!("npc-{t}-{i}"), "NPC", PropertyMap::new())
                        })
                        .unwrap()
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in writers {
        handle.join().unwrap();
    }

    let count = shared.read(|store| store.graph().node_count()).unwrap();
    assert_eq!(count, 100);
    assert!(shared
        .read(|store| store.get_node_by_name("npc-3-24").is_some())
        .unwrap());
}
