use crate::models::spot::{Category, Spot};

pub const FAMOUS_PLACES: [&str; 5] = ["Petra", "Wadi Rum", "Dead Sea", "Jerash", "Amman Citadel"];

pub const HIDDEN_SPOTS: [&str; 5] = [
    "Dana Biosphere Reserve",
    "Mount Nebo",
    "Karak Castle",
    "Salt",
    "Ajloun",
];

pub fn is_famous(name: &str) -> bool {
    FAMOUS_PLACES.contains(&name)
}

pub fn is_hidden(name: &str) -> bool {
    HIDDEN_SPOTS.contains(&name)
}

fn spot(
    id: u32,
    name: &str,
    description: &str,
    (lat, lng): (f64, f64),
    category: Category,
    tips: &str,
) -> Spot {
    Spot {
        id,
        name: name.to_string(),
        description: description.to_string(),
        lat,
        lng,
        category,
        tips: Some(tips.to_string()),
    }
}

/// The built-in catalog of Jordan's tourist spots, in priority order.
pub fn jordan_spots() -> Vec<Spot> {
    vec![
        spot(
            1,
            "Petra",
            "The ancient Nabatean city carved into rose-red cliffs. One of the New Seven Wonders of the World, featuring the iconic Treasury and numerous archaeological sites.",
            (30.3285, 35.4444),
            Category::History,
            "Arrive early (before 8 AM) to avoid crowds and see the Treasury in morning light. Wear comfortable walking shoes - you'll walk 4-5 km. Allow at least 4-5 hours. Bring water and sun protection.",
        ),
        spot(
            2,
            "Wadi Rum",
            "A stunning red desert landscape known as the Valley of the Moon. Experience jeep tours, camel rides, and overnight stays in Bedouin camps under the stars.",
            (29.5833, 35.4167),
            Category::Nature,
            "Book a 4x4 jeep tour for the best experience. Stay overnight in a Bedouin camp for stargazing. Bring warm clothes - desert nights are cold. Best visited in spring or autumn.",
        ),
        spot(
            3,
            "Dead Sea",
            "The lowest point on Earth at 430 meters below sea level. Float in the mineral-rich waters and enjoy therapeutic mud treatments at world-class spa resorts.",
            (31.5, 35.5),
            Category::Wellness,
            "Don't shave before visiting - the salt will sting! Apply mud 20 minutes before floating. Avoid getting water in your eyes. Best time: early morning or late afternoon. Bring waterproof camera.",
        ),
        spot(
            4,
            "Jerash",
            "One of the best-preserved Roman cities outside of Italy. Explore colonnaded streets, ancient temples, the Oval Plaza, and Hadrian's Arch.",
            (32.2808, 35.8961),
            Category::History,
            "Visit in the morning to avoid heat. Allow 2-3 hours. The Oval Plaza and Cardo Maximus are must-sees. Wear comfortable shoes for walking on ancient stones.",
        ),
        spot(
            5,
            "Amman Citadel",
            "An ancient hilltop site in the heart of Amman featuring ruins from the Roman, Byzantine, and Umayyad periods. Offers panoramic views of the capital city.",
            (31.9539, 35.9342),
            Category::History,
            "Best visited in the morning or late afternoon for cooler weather and better photos. Allow 1-2 hours. The Jordan Archaeological Museum is included. Great views of downtown Amman.",
        ),
        spot(
            6,
            "Ajloun",
            "Home to the impressive Ajloun Castle, a 12th-century Islamic fortress built to protect against Crusader attacks. Surrounded by beautiful pine forests.",
            (32.3333, 35.75),
            Category::History,
            "Combine with Jerash for a full day trip. The castle offers great views. Allow 1-2 hours. Best visited in spring when the surrounding area is green.",
        ),
        spot(
            7,
            "Salt",
            "A historic town with beautiful Ottoman-era architecture. Known for its traditional stone buildings, markets, and rich cultural heritage.",
            (32.0389, 35.7272),
            Category::Cultural,
            "Explore the old souk and traditional houses. Try local sweets and traditional Jordanian food. Best visited as a half-day trip from Amman. Great for photography.",
        ),
        spot(
            8,
            "Dana Biosphere Reserve",
            "Jordan's largest nature reserve with diverse ecosystems, hiking trails, and stunning mountain landscapes. Perfect for nature enthusiasts.",
            (30.6833, 35.6167),
            Category::Nature,
            "Bring hiking boots and water. Best for nature lovers and hikers. Allow a full day. Spring and autumn are the best seasons. Stay overnight for the full experience.",
        ),
        spot(
            9,
            "Mount Nebo",
            "The biblical site where Moses viewed the Promised Land. Features ancient mosaics and breathtaking views of the Jordan Valley and Dead Sea.",
            (31.7667, 35.7167),
            Category::History,
            "Visit early morning for best views and fewer crowds. The mosaics in the church are beautiful. Allow 1 hour. Can be combined with Dead Sea visit.",
        ),
        spot(
            10,
            "Karak Castle",
            "A massive Crusader castle built in the 12th century. Explore the underground passages and enjoy panoramic views of the surrounding area.",
            (31.1833, 35.7),
            Category::History,
            "Wear comfortable shoes for exploring the castle ruins. Allow 1-2 hours. Great views from the top. Can be visited on the way to Petra from Amman.",
        ),
    ]
}
