// Host-side tests for tour descriptors, destination conversion and the
// sample catalog.

use panorama_viewer::catalog::{default_tour, sample_tours};
use panorama_viewer::error::TourError;
use panorama_viewer::tour::{Destination, HotspotContent, HotspotKind, Tour, PLACEHOLDER_IMAGE};

const TOUR_JSON: &str = r#"{
  "id": "7",
  "title": "Harbour Lights",
  "description": "Evening walk along the old harbour.",
  "image": "/assets/harbour.jpg",
  "duration": "30 mins",
  "price": 19.5,
  "rating": 4.6,
  "category": "Urban",
  "region": "Europe",
  "highlights": ["Lighthouse", "Fish market"],
  "hotspots": [
    { "id": "a", "title": "Lighthouse", "description": "Built 1884", "position": [0, 2, -5],
      "type": "info", "content": "Still in service." },
    { "id": "b", "title": "Bells", "description": "Church bells", "position": [3, 1, 2],
      "type": "audio", "audioUrl": "/audio/bells.mp3" },
    { "id": "c", "title": "Boats", "description": "Fishing fleet", "position": [-2, 1, 3],
      "type": "video" }
  ]
}"#;

#[test]
fn parses_the_site_tour_shape() {
    let tour = Tour::from_json(TOUR_JSON).expect("valid tour");
    assert_eq!(tour.id, "7");
    assert_eq!(tour.hotspots.len(), 3);
    assert!(!tour.featured);
    assert_eq!(
        tour.hotspots[0].content,
        HotspotContent::Info {
            text: Some("Still in service.".into())
        }
    );
    assert_eq!(
        tour.hotspots[1].content,
        HotspotContent::Audio {
            src: Some("/audio/bells.mp3".into())
        }
    );
    assert_eq!(tour.hotspots[2].content, HotspotContent::Video { src: None });
    assert_eq!(tour.hotspots[2].kind(), HotspotKind::Video);
    assert_eq!(tour.hotspot_index("b"), Some(1));
    assert!(tour.hotspot("zz").is_none());
}

#[test]
fn serializes_back_with_site_keys() {
    let tour = Tour::from_json(TOUR_JSON).unwrap();
    let json = tour.to_json().unwrap();
    assert!(json.contains(r#""audioUrl":"/audio/bells.mp3""#));
    assert!(json.contains(r#""type":"video""#));
    assert_eq!(Tour::from_json(&json).unwrap(), tour);
}

#[test]
fn rejects_duplicate_hotspot_ids() {
    let json = TOUR_JSON.replace(r#""id": "b""#, r#""id": "a""#);
    match Tour::from_json(&json) {
        Err(TourError::DuplicateHotspot { tour, id }) => {
            assert_eq!(tour, "7");
            assert_eq!(id, "a");
        }
        other => panic!("expected duplicate error, got {other:?}"),
    }
}

#[test]
fn rejects_malformed_json_and_unknown_kinds() {
    assert!(matches!(Tour::from_json("{"), Err(TourError::Format(_))));
    let json = TOUR_JSON.replace(r#""type": "video""#, r#""type": "hologram""#);
    assert!(matches!(Tour::from_json(&json), Err(TourError::Format(_))));
}

#[test]
fn destination_becomes_a_tour() {
    let json = r#"{
      "id": "d-42", "name": "Petra", "description": "Rose-red city.",
      "country": "Jordan", "region": "Middle East", "category": "Historical",
      "image_url": null, "price": 24.0, "duration_minutes": 44.6, "rating": 4.7,
      "latitude": 30.33, "longitude": 35.44, "featured": true
    }"#;
    let tour = Tour::from(Destination::from_json(json).unwrap());
    assert_eq!(tour.id, "d-42");
    assert_eq!(tour.title, "Petra");
    assert_eq!(tour.image, PLACEHOLDER_IMAGE);
    assert_eq!(tour.duration, "45 mins");
    assert_eq!(tour.highlights.len(), 4);
    assert!(tour.featured);
    let kinds: Vec<HotspotKind> = tour.hotspots.iter().map(|h| h.kind()).collect();
    assert_eq!(
        kinds,
        vec![HotspotKind::Info, HotspotKind::Audio, HotspotKind::Video]
    );
    assert!(tour.validate().is_ok());
    match &tour.hotspots[0].content {
        HotspotContent::Info { text: Some(t) } => assert!(t.starts_with("Welcome to Petra.")),
        other => panic!("unexpected content {other:?}"),
    }
}

#[test]
fn destination_keeps_its_own_image() {
    let json = r#"{ "id": "1", "name": "Kyoto", "description": "Temples.", "region": "Asia",
      "category": "Cultural", "image_url": "https://img.example/kyoto.jpg",
      "price": 10, "duration_minutes": 30, "rating": 4.5 }"#;
    let tour = Tour::from(Destination::from_json(json).unwrap());
    assert_eq!(tour.image, "https://img.example/kyoto.jpg");
    assert_eq!(tour.duration, "30 mins");
}

#[test]
fn sample_catalog_is_valid() {
    let tours = sample_tours();
    assert_eq!(tours.len(), 3);
    for t in &tours {
        assert!(t.validate().is_ok());
        assert_eq!(t.hotspots.len(), 3);
    }
    assert_eq!(default_tour(), tours[0]);
    assert_eq!(default_tour().title, "Ancient Wonders of Angkor Wat");
}
