use rand::seq::SliceRandom;

pub const CRAB_IMAGES: &[&str] = &[
    "https://media.istockphoto.com/id/544453032/photo/crab-close-up-cuba.jpg",
    "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/Sally_Lightfoot_Crab_2019.jpg/1200px-Sally_Lightfoot_Crab_2019.jpg",
    "https://plus.unsplash.com/premium_photo-1667864262393-b5319164c532",
    "https://images.unsplash.com/photo-1580841129862-bc2a2d113c45",
    "https://images.unsplash.com/photo-1527681192512-bca34fd580bb",
];

pub const APPEARANCE_MESSAGES: &[&str] = &[
    "🦀 A crab just scuttled into the server! Quick, catch it!",
    "🦀 Look! A crab appeared! Don't let it get away!",
    "🦀 Crab alert! A crab has been spotted in the wild!",
    "🦀 Pinch, pinch! A crab is here! Catch it before it runs away!",
    "🦀 Sideways walking friend appeared! Time to catch!",
    "🦀 Oh snap! A crab just showed up!",
    "🦀 Beep boop! Crab detected! Initiate catch sequence!",
    "🦀 A wild crab appeared! It looks confused!",
    "🦀 Crab-o-clock! Time to catch!",
    "🦀 A crab is doing the sideways shuffle!",
];

pub const CRAB_FACTS: &[&str] = &[
    "Crabs have 10 legs and walk sideways!",
    "There are over 4,500 species of crabs worldwide.",
    "The Japanese spider crab has the largest leg span of any arthropod.",
    "Crabs can regenerate lost limbs during molting.",
    "Some crabs can live up to 100 years!",
    "Crabs communicate by drumming or waving their claws.",
    "The coconut crab is the largest land-living arthropod.",
    "Crabs have excellent vision and can see in multiple directions.",
];

pub fn appearance_message() -> &'static str {
    pick(APPEARANCE_MESSAGES)
}

pub fn crab_image() -> &'static str {
    pick(CRAB_IMAGES)
}

pub fn crab_fact() -> &'static str {
    pick(CRAB_FACTS)
}

fn pick(list: &'static [&'static str]) -> &'static str {
    list.choose(&mut rand::thread_rng()).copied().unwrap_or("🦀")
}
