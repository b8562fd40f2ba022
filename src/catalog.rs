//! Built-in demo tours, shown when the host mounts the viewer without one.

use crate::tour::{Hotspot, HotspotContent, Tour};

fn info(id: &str, title: &str, description: &str, position: [f32; 3], text: &str) -> Hotspot {
    Hotspot {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        position,
        content: HotspotContent::Info {
            text: Some(text.into()),
        },
    }
}

fn audio(id: &str, title: &str, description: &str, position: [f32; 3], src: &str) -> Hotspot {
    Hotspot {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        position,
        content: HotspotContent::Audio {
            src: Some(src.into()),
        },
    }
}

fn video(id: &str, title: &str, description: &str, position: [f32; 3], src: &str) -> Hotspot {
    Hotspot {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        position,
        content: HotspotContent::Video {
            src: Some(src.into()),
        },
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_tours() -> Vec<Tour> {
    vec![
        Tour {
            id: "1".into(),
            title: "Ancient Wonders of Angkor Wat".into(),
            description: "Explore the magnificent temple complex of Angkor Wat in Cambodia, where ancient Khmer architecture meets spiritual tranquility in stunning sunrise views.".into(),
            image: "/assets/tour-angkor-wat.jpg".into(),
            duration: "45 mins".into(),
            price: 29.99,
            rating: 4.9,
            category: "Cultural".into(),
            region: "Asia".into(),
            highlights: strings(&[
                "Sunrise over the main temple",
                "Intricate stone carvings exploration",
                "Hidden chambers and passages",
                "Buddhist monk morning rituals",
            ]),
            hotspots: vec![
                info(
                    "h1",
                    "Main Temple Entrance",
                    "The iconic entrance to Angkor Wat, featuring the famous causeway and reflection pools.",
                    [0.0, 2.0, -5.0],
                    "Built in the early 12th century, this is the largest religious monument in the world.",
                ),
                audio(
                    "h2",
                    "Central Tower",
                    "The highest point of the temple complex with panoramic views.",
                    [0.0, 8.0, 0.0],
                    "/audio/temple-chants.mp3",
                ),
                video(
                    "h3",
                    "Bas-Relief Gallery",
                    "Intricate stone carvings depicting Hindu epics and Khmer history.",
                    [-3.0, 1.0, 2.0],
                    "/video/carving-details.mp4",
                ),
            ],
            featured: true,
        },
        Tour {
            id: "2".into(),
            title: "Neon Dreams: Tokyo After Dark".into(),
            description: "Immerse yourself in the electric energy of Tokyo's nightlife, from bustling Shibuya crossing to intimate izakayas in hidden alleyways.".into(),
            image: "/assets/tour-tokyo.jpg".into(),
            duration: "60 mins".into(),
            price: 34.99,
            rating: 4.8,
            category: "Urban".into(),
            region: "Asia".into(),
            highlights: strings(&[
                "Shibuya crossing at rush hour",
                "Traditional izakaya experience",
                "Neon-lit gaming arcades",
                "Rooftop city views",
            ]),
            hotspots: vec![
                info(
                    "h4",
                    "Shibuya Crossing",
                    "The world's busiest pedestrian crossing in the heart of Tokyo.",
                    [0.0, 1.0, -3.0],
                    "Over 2.4 million people cross this intersection daily during peak times.",
                ),
                audio(
                    "h5",
                    "Izakaya Alley",
                    "Experience authentic Japanese nightlife in a traditional drinking alley.",
                    [2.0, 0.0, 1.0],
                    "/audio/izakaya-ambience.mp3",
                ),
                video(
                    "h6",
                    "Gaming Arcade",
                    "Multi-story arcade with classic and modern Japanese games.",
                    [-2.0, 2.0, 0.0],
                    "/video/arcade-lights.mp4",
                ),
            ],
            featured: true,
        },
        Tour {
            id: "3".into(),
            title: "Swiss Alps: Winter Wonderland".into(),
            description: "Journey through snow-capped peaks and pristine alpine villages in the Swiss Alps, where every view is a postcard-perfect mountain panorama.".into(),
            image: "/assets/tour-swiss-alps.jpg".into(),
            duration: "50 mins".into(),
            price: 32.99,
            rating: 4.9,
            category: "Nature".into(),
            region: "Europe".into(),
            highlights: strings(&[
                "Matterhorn peak views",
                "Alpine village exploration",
                "Traditional chalet interiors",
                "Mountain railway journey",
            ]),
            hotspots: vec![
                info(
                    "h7",
                    "Matterhorn Viewpoint",
                    "Iconic pyramid-shaped peak of the Matterhorn mountain.",
                    [0.0, 5.0, -8.0],
                    "At 4,478 meters, the Matterhorn is one of the highest peaks in the Alps.",
                ),
                audio(
                    "h8",
                    "Alpine Village",
                    "Traditional Swiss village nestled in the mountains.",
                    [3.0, 1.0, -2.0],
                    "/audio/alpine-winds.mp3",
                ),
                video(
                    "h9",
                    "Mountain Railway",
                    "Historic cogwheel railway climbing through the mountains.",
                    [-4.0, 2.0, 1.0],
                    "/video/train-journey.mp4",
                ),
            ],
            featured: false,
        },
    ]
}

/// Tour shown when no tour was supplied.
pub fn default_tour() -> Tour {
    let mut tours = sample_tours();
    tours.swap_remove(0)
}
