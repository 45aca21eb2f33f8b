/// Buzzword roasts, checked in this order. Keywords are lowercase.
pub const KEYWORD_ROASTS: &[(&str, &[&str])] = &[
    (
        "blockchain",
        &[
            "Blockchain? Wirklich? Es ist 2024, nicht 2017. Selbst Krypto-Bros haben aufgegeben.",
            "Ah, Blockchain. Die Antwort auf eine Frage, die niemand gestellt hat.",
        ],
    ),
    (
        "ai",
        &[
            "AI? Wow, so innovativ. Hast du auch daran gedacht, Machine Learning und Synergien reinzupacken?",
            "AI ist nur ein fancy Wort für 'Ich hab keine echte Technologie'.",
        ],
    ),
    (
        "uber",
        &[
            "Uber für irgendwas? Der Venture Capital Friedhof ist voll mit 'Uber für X' Startups.",
            "'Uber für...' - Das Startup-Äquivalent von 'Ich hab keine eigenen Ideen'.",
        ],
    ),
    (
        "tinder",
        &[
            "Tinder für was? Menschen swipen schon genug. Lass sie in Ruhe.",
            "Noch ne Dating-App-Variante? Die Einsamkeit der User ist nicht dein Business Model.",
        ],
    ),
    (
        "app",
        &[
            "Eine App? Revolutionär. Hat vorher noch niemand dran gedacht.",
            "Die Welt braucht keine weitere App. Die Welt braucht Therapie.",
        ],
    ),
    (
        "plattform",
        &[
            "Eine Plattform! Natürlich. Weil das Internet nicht genug Plattformen hat.",
            "Plattform ist Startup-Sprech für 'Ich hab kein echtes Produkt'.",
        ],
    ),
    (
        "platform",
        &[
            "Eine Platform! Natürlich. Weil das Internet nicht genug Platforms hat.",
            "Platform ist Startup-Sprech für 'Ich hab kein echtes Produkt'.",
        ],
    ),
    (
        "social",
        &[
            "Social Media? Ja klar, Facebook, Instagram, TikTok, Twitter warten nur darauf dass du kommst.",
            "Noch ein Social Network? Die Menschheit ist schon genug vernetzt. Zu viel sogar.",
        ],
    ),
];
