#![allow(clippy::unwrap_used)]

use roomaxis::operations::dimension::GenerateDimensions;
use roomaxis::operations::query::ValidateRoom;
use roomaxis::operations::walls::{dedup_by_orientation, DeriveWalls, UniqueWalls};
use roomaxis::room::{RoomData, RoomType};
use roomaxis::topology::RoomStore;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const L_ROOM: &str = r#"{
    "walls": [{"id": "a"}, {"id": "b"}, {"id": "c"}, {"id": "d"}, {"id": "e"}, {"id": "f"}],
    "corners": [
        {"id": "1", "x": 0,  "y": 0, "wallStarts": [{"id": "a"}], "wallEnds": [{"id": "f"}]},
        {"id": "2", "x": 10, "y": 0, "wallStarts": [{"id": "b"}], "wallEnds": [{"id": "a"}]},
        {"id": "3", "x": 10, "y": 4, "wallStarts": [{"id": "c"}], "wallEnds": [{"id": "b"}]},
        {"id": "4", "x": 4,  "y": 4, "wallStarts": [{"id": "d"}], "wallEnds": [{"id": "c"}]},
        {"id": "5", "x": 4,  "y": 9, "wallStarts": [{"id": "e"}], "wallEnds": [{"id": "d"}]},
        {"id": "6", "x": 0,  "y": 9, "wallStarts": [{"id": "f"}], "wallEnds": [{"id": "e"}]}
    ]
}"#;

#[test]
fn l_shaped_room_from_json() {
    init_tracing();
    let room = RoomData::from_json_str(L_ROOM).unwrap();
    ValidateRoom::new().execute(&room).unwrap();

    let store = RoomStore::from_room(&room);
    assert_eq!(DeriveWalls::new().execute(&store).len(), 6);

    let opts = GenerateDimensions::new().execute(&store);
    let ids: Vec<_> = opts.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, ["dim_a_0", "dim_b_1"]);

    // Wall a lies on y = 0: the room spans 10 along it and 9 across it.
    assert!((opts[0].width_distance - 10.0).abs() < 1e-10);
    assert!((opts[0].length_distance - 9.0).abs() < 1e-10);
    // Wall b is (10,0)-(10,4): the stem corners reach 9 along it.
    assert!((opts[1].width_distance - 9.0).abs() < 1e-10);
    assert!((opts[1].length_distance - 10.0).abs() < 1e-10);
}

#[test]
fn every_preset_produces_options() {
    init_tracing();
    for kind in RoomType::ALL {
        let store = RoomStore::from_room(&RoomData::preset(kind));
        let unique = UniqueWalls::new().execute(&store);
        assert_eq!(dedup_by_orientation(unique.clone(), 0.01), unique);

        let opts = GenerateDimensions::new().execute(&store);
        assert_eq!(opts.len(), unique.len(), "{kind}");
        for (opt, wall) in opts.iter().zip(&unique) {
            assert!(opt.width_distance >= wall.length() - 1e-12, "{kind}");
            assert!(opt.length_distance.is_finite() && opt.length_distance >= 0.0);
        }
    }
}

#[test]
fn malformed_room_degrades_silently() {
    init_tracing();
    let room = RoomData::from_json_str(
        r#"{"corners": [
            {"id": "p", "x": 0, "y": 0, "wallStarts": [{"id": "x"}, {"id": "lost"}]},
            {"id": "q", "x": 3, "y": 0, "wallEnds": [{"id": "x"}]}
        ]}"#,
    )
    .unwrap();
    assert!(ValidateRoom::new().execute(&room).is_err());

    let store = RoomStore::from_room(&room);
    let opts = GenerateDimensions::new().execute(&store);
    assert_eq!(opts.len(), 1);
    assert!((opts[0].width_distance - 3.0).abs() < 1e-10);
    assert!(opts[0].length_distance.abs() < 1e-10);
}

#[test]
fn empty_room() {
    let room = RoomData::from_json_str(r#"{"walls": [], "corners": []}"#).unwrap();
    let store = RoomStore::from_room(&room);
    assert!(DeriveWalls::new().execute(&store).is_empty());
    assert!(GenerateDimensions::new().execute(&store).is_empty());
}
