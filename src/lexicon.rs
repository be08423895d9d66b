//! Static word lexicon for semantic name analysis
//!
//! Three tables (family kernels, categorized modifiers, categorized
//! descriptors) plus a list of known compound names written without spaces.
//! The lexicon is built once and stays immutable; the analyzer receives it
//! explicitly instead of reaching for a global.

use crate::metrics::Family;

/// Closed set of modifier categories. A name contributes at most one match
/// per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierCategory {
    Intensity,
    Saturation,
    Texture,
    Temperature,
    Degree,
    Grayish,
    Hueish,
    Poetic,
    Endings,
    Dark,
    Light,
    Bright,
    Dull,
}

/// Closed set of descriptor categories (flavor words that carry no color
/// information of their own).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorCategory {
    Nature,
    Places,
    Emotions,
    Endings,
    Crayola,
    Other,
}

/// One family's kernel words, with the space-stripped variants precomputed.
#[derive(Debug, Clone)]
pub struct KernelEntry {
    pub family: Family,
    pub variants: Vec<String>,
    pub combined: Vec<String>,
}

/// Immutable word tables, constructed once at startup.
#[derive(Debug, Clone)]
pub struct Lexicon {
    kernels: Vec<KernelEntry>,
    modifiers: Vec<(ModifierCategory, Vec<String>)>,
    descriptors: Vec<(DescriptorCategory, Vec<String>)>,
    compounds: Vec<String>,
}

impl Lexicon {
    pub fn new(
        kernels: Vec<(Family, Vec<String>)>,
        modifiers: Vec<(ModifierCategory, Vec<String>)>,
        descriptors: Vec<(DescriptorCategory, Vec<String>)>,
        compounds: Vec<String>,
    ) -> Self {
        let kernels = kernels
            .into_iter()
            .map(|(family, variants)| {
                let combined = variants.iter().map(|v| v.replace(' ', "")).collect();
                KernelEntry {
                    family,
                    variants,
                    combined,
                }
            })
            .collect();
        Self {
            kernels,
            modifiers,
            descriptors,
            compounds,
        }
    }

    /// The built-in lexicon.
    pub fn builtin() -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| (*w).to_string()).collect::<Vec<_>>();

        let kernels = KERNEL_TABLE
            .iter()
            .map(|(family, words)| (*family, owned(words)))
            .collect();
        let modifiers = MODIFIER_TABLE
            .iter()
            .map(|(category, words)| (*category, owned(words)))
            .collect();
        let descriptors = DESCRIPTOR_TABLE
            .iter()
            .map(|(category, words)| (*category, owned(words)))
            .collect();
        let compounds = owned(KNOWN_COMPOUNDS);

        Self::new(kernels, modifiers, descriptors, compounds)
    }

    pub fn kernels(&self) -> &[KernelEntry] {
        &self.kernels
    }

    pub fn modifiers(&self) -> &[(ModifierCategory, Vec<String>)] {
        &self.modifiers
    }

    pub fn descriptors(&self) -> &[(DescriptorCategory, Vec<String>)] {
        &self.descriptors
    }

    pub fn compounds(&self) -> &[String] {
        &self.compounds
    }
}

const KERNEL_TABLE: &[(Family, &[&str])] = &[
    (
        Family::Red,
        &[
            "crimson", "scarlet", "ruby", "cardinal", "carmine", "cherry", "maroon", "claret",
            "burgundy", "vermilion", "garnet", "brick red", "oxblood", "wine", "rosewood", "fire",
            "red", "brick", "tomato", "mahogany", "coral", "rose", "raspberry", "cerise",
        ],
    ),
    (
        Family::Orange,
        &[
            "tangerine", "amber", "peach", "apricot", "paprika", "saffron", "ginger", "copper",
            "persimmon", "pumpkin", "cantaloupe", "cinnamon", "rust", "terracotta", "burnt orange",
            "orange", "coral", "carrot", "mango", "marigold", "tiger", "sunset", "clay", "honey",
        ],
    ),
    (
        Family::Yellow,
        &[
            "lemon", "gold", "canary", "mustard", "dandelion", "butter", "sunflower", "maize",
            "corn", "straw", "flax", "bumblebee", "sunshine", "honey", "blond", "banana",
            "pineapple", "citrine", "topaz", "wheat", "amber", "saffron", "marigold",
        ],
    ),
    (
        Family::Chartreuse,
        &["chartreuse", "lime", "pistachio", "peridot"],
    ),
    (
        Family::Green,
        &[
            "emerald", "jade", "sage", "olive", "fern", "mint", "khaki", "forest", "moss",
            "seafoam", "hunter", "kelly", "shamrock", "pine", "celadon", "viridian", "malachite",
            "avocado", "artichoke", "basil", "clover", "cactus", "moss green", "army green",
            "bottle green",
        ],
    ),
    (
        Family::Springgreen,
        &["spring", "mint", "turquoise", "aqua"],
    ),
    (
        Family::Cyan,
        &[
            "cyan", "sky", "powder", "ice", "robin's egg", "caribbean", "tiffany blue", "arctic",
            "babyblue", "crystal", "glacier", "frost", "winter sky", "airforce", "blue",
        ],
    ),
    (Family::Azure, &["azure", "cobalt", "cerulean", "sapphire"]),
    (
        Family::Blue,
        &[
            "sapphire", "cerulean", "cobalt", "azure", "steel", "light blue", "navy blue",
            "royal blue", "indigo", "denim", "prussian", "saxe", "yinmn", "yinmn blue",
            "periwinkle", "cornflower", "oxford", "midnight", "phthalo", "ultramarine", "delft",
            "space", "berry",
        ],
    ),
    (
        Family::Violet,
        &["violet", "lavender", "amethyst", "orchid"],
    ),
    (
        Family::Magenta,
        &[
            "magenta", "fuchsia", "raspberry", "cerise", "shocking pink", "hot pink", "deep pink",
            "french rose", "pink", "rose", "ruby", "raspberry", "carmine", "cerise", "hollywood",
            "bright pink",
        ],
    ),
    (Family::Rose, &["rose", "blush", "pink", "coral"]),
    (
        Family::Neutral,
        &["gray", "charcoal", "slate", "silver"],
    ),
    (
        Family::Lime,
        &[
            "lime", "chartreuse", "pistachio", "peridot", "spring bud", "electric lime", "pear",
            "apple green", "kiwi", "neon lime", "acid green", "harlequin", "spring green",
        ],
    ),
    (
        Family::Teal,
        &[
            "teal", "turquoise", "aqua", "aquamarine", "peacock", "cerulean", "marine", "pacific",
            "cyan", "tiffany blue", "wave", "lagoon", "mermaid", "parrot", "egyptian blue",
        ],
    ),
    (
        Family::Purple,
        &[
            "violet", "lavender", "plum", "lilac", "amethyst", "orchid", "mauve", "heliotrope",
            "grape", "boysenberry", "eggplant", "byzantium", "pansy", "iris", "mulberry",
            "wisteria", "passion", "royal purple", "tyrian", "jam", "wine",
        ],
    ),
    (
        Family::Brown,
        &[
            "umber", "sienna", "ghestnut", "mahogany", "chocolate", "auburn", "taupe", "beige",
            "sand", "cocoa", "mocha", "caramel", "cinnamon", "almond", "hazel", "brunette",
            "tawny", "fawn", "coffee", "walnut", "pecan", "cedar", "oak", "leather", "cork",
            "tan", "khaki", "olive",
        ],
    ),
    (
        Family::Gray,
        &[
            "slate", "charcoal", "pewter", "ashen", "silver", "smoke", "gunmetal", "ash",
            "battleship", "nickel", "platinum", "iron", "shadow", "grey", "fog", "mist", "stone",
            "concrete", "cement", "steel", "tin", "lead", "anchor", "dove",
        ],
    ),
    (
        Family::Pink,
        &[
            "pink", "salmon", "coral", "blush", "watermelon", "flamingo", "bubblegum", "peach",
            "rose", "powder pink", "tea rose", "cherry blossom", "barbie pink", "carnation",
            "fuchsia", "magenta", "rosewood", "raspberry", "strawberry", "cotton candy",
        ],
    ),
    (
        Family::Black,
        &[
            "black", "jet", "ebony", "onyx", "raven", "sable", "midnight", "coal", "obsidian",
            "ink", "charcoal", "graphite", "oil", "pitch", "soot", "void", "space", "licorice",
        ],
    ),
    (
        Family::White,
        &[
            "white", "snowy", "ivory", "cream", "pearl", "alabaster", "chalk", "bone", "eggshell",
            "vanilla", "cotton", "lace", "floral white", "seashell", "milk", "porcelain", "lily",
            "daisy", "powder", "frost", "salt", "paper",
        ],
    ),
    (
        Family::Metallic,
        &[
            "gold", "silver", "copper", "bronze", "brass", "platinum", "steel", "nickel",
            "chrome", "iron", "pewter", "gunmetal", "mercury", "titanium", "aluminum",
            "rose gold", "white gold", "black gold", "osmium", "lead", "tin", "zinc",
        ],
    ),
    (
        Family::Pastel,
        &[
            "pastel", "baby pink", "baby blue", "mint cream", "lavender blush", "powder blue",
            "peach puff",
        ],
    ),
    (
        Family::Neon,
        &[
            "neon", "electric blue", "electric lime", "electric purple", "laser lemon",
            "hot magenta", "screamin green",
        ],
    ),
    (
        Family::Earth,
        &[
            "ochre", "sienna", "umber", "khaki", "olive drab", "sandstone", "clay", "mud",
            "terracotta", "rust", "burnt sienna", "raw umber", "sepia", "camel", "desert sand",
            "dirt", "soil", "adobe", "sand dune", "canyon", "mushroom", "taupe", "beige",
        ],
    ),
    (
        Family::Jewel,
        &[
            "ruby", "emerald", "sapphire", "amethyst", "topaz", "opal", "jade", "pearl",
            "garnet", "diamond", "onyx", "turquoise", "lapis lazuli", "peridot", "aquamarine",
            "citrine", "tourmaline", "zircon", "moonstone", "alexandrite", "tanzanite", "coral",
        ],
    ),
    (
        Family::Skin,
        &[
            "porcelain", "alabaster", "ivory", "beige", "tan", "sand", "almond", "peach",
            "caramel", "cinnamon", "honey", "mocha", "cocoa", "chestnut", "mahogany", "bronze",
            "olive", "golden", "pale", "fair", "medium", "dark", "ebony", "umber",
        ],
    ),
    (
        Family::Seasonal,
        &[
            "spring green", "summer sky", "autumn leaf", "winter white", "harvest gold",
            "frost blue", "midsummer night", "april showers", "october rust", "december snow",
            "vernal", "estival", "autumnal", "hibernal", "indian summer", "january frost",
        ],
    ),
    (
        Family::Food,
        &[
            "chocolate", "caramel", "cinnamon", "honey", "mocha", "cocoa", "cream", "vanilla",
            "mint", "cherry", "strawberry", "blueberry", "matcha", "pumpkin", "eggplant",
            "tomato", "avocado", "banana", "lemon", "lime", "orange", "grape", "watermelon",
            "coffee", "tea", "coconut", "paprika", "saffron", "curry", "wasabi",
        ],
    ),
    (
        Family::Nature,
        &[
            "forest", "moss", "pine", "olive", "sage", "fern", "seafoam", "ocean", "river",
            "sky", "sunset", "dawn", "dusk", "storm", "thunder", "earth", "clay", "stone",
            "mountain", "desert", "jungle", "savanna", "tundra", "glacier", "volcano", "aurora",
        ],
    ),
    (
        Family::Floral,
        &[
            "rose", "lilac", "lavender", "violet", "orchid", "peony", "daisy", "sunflower",
            "marigold", "pansy", "iris", "tulip", "cherry blossom", "magnolia", "hydrangea",
            "hibiscus", "jasmine", "gardenia", "carnation", "daffodil",
        ],
    ),
    (
        Family::Cosmic,
        &[
            "space", "galaxy", "nebula", "starlight", "moonlight", "sunlight", "aurora", "comet",
            "meteor", "planetary", "solar flare", "cosmic dust", "black hole", "supernova",
            "milky way", "andromeda",
        ],
    ),
    (
        Family::Vintage,
        &[
            "sepia", "antique", "victorian", "retro", "heritage", "classic", "timeless",
            "old rose", "patina", "distressed", "faded", "weathered", "aged", "historic",
        ],
    ),
    (
        Family::Festive,
        &[
            "festive red", "holiday green", "christmas gold", "hanukkah blue", "diwali orange",
            "easter pink", "halloween orange", "valentine red", "new year", "new year silver",
            "birthday bright",
        ],
    ),
];

const MODIFIER_TABLE: &[(ModifierCategory, &[&str])] = &[
    (
        ModifierCategory::Intensity,
        &[
            "strong", "medium", "bold", "light", "lighter", "lightest", "dark", "darker",
            "darkest", "bright", "brighter", "brightest",
        ],
    ),
    (
        ModifierCategory::Saturation,
        &[
            "saturated", "desaturated", "washed", "tinted", "shade", "shaded", "vivid", "pale",
            "palest", "faint", "faded", "deep", "deeper", "rich", "soft", "pastel", "clear",
            "dull",
        ],
    ),
    (
        ModifierCategory::Texture,
        &[
            "silk", "silky", "velvet", "pearl", "matte", "gloss", "glossy", "shiny", "electric",
            "neon", "fluorescent", "metallic", "wool", "pearlescent", "crystal", "iridescent",
            "satin", "linen",
        ],
    ),
    (
        ModifierCategory::Temperature,
        &["warm", "warmer", "cool", "cooler", "hot", "cold", "frost"],
    ),
    (
        ModifierCategory::Degree,
        &[
            "very", "ultra", "super", "extra", "most", "more", "less", "slightly", "somewhat",
            "fairly", "quite", "rather",
        ],
    ),
    (
        ModifierCategory::Grayish,
        &["gray", "grey", "grayish", "greyish", "dusty", "muddy", "muted", "dirty"],
    ),
    (
        ModifierCategory::Hueish,
        &[
            "almost", "bluish", "greenish", "yellowish", "purplish", "reddish", "orangeish",
            "pinkish", "brownish",
        ],
    ),
    (
        ModifierCategory::Poetic,
        &[
            "ancient", "celestial", "cosmic", "ethereal", "mystic", "primal", "serene",
            "whispering", "zen", "dancing", "golden", "silver", "moonlit", "sunlit", "starlit",
            "ocean", "forest",
        ],
    ),
    (
        ModifierCategory::Endings,
        &["color", "tone", "hue", "tint", "chroma", "vibrant"],
    ),
    (
        ModifierCategory::Dark,
        &["dark", "deep", "midnight", "navy"],
    ),
    (
        ModifierCategory::Light,
        &["light", "pale", "soft", "pastel"],
    ),
    (
        ModifierCategory::Bright,
        &["bright", "vivid", "vibrant", "hot"],
    ),
    (
        ModifierCategory::Dull,
        &["dull", "muted", "dusty", "faded"],
    ),
];

const DESCRIPTOR_TABLE: &[(DescriptorCategory, &[&str])] = &[
    (
        DescriptorCategory::Nature,
        &[
            "dawn", "dusk", "mist", "glow", "bloom", "veil", "haze", "spark", "drift", "wave",
            "flame", "frost", "shadow", "light", "sun", "moon", "star", "sky", "sea", "ocean",
            "river", "stone", "rock", "sand", "leaf", "forest", "field",
        ],
    ),
    (
        DescriptorCategory::Places,
        &[
            "meadow", "mountain", "valley", "desert", "jungle", "canyon", "glacier", "volcano",
            "aurora", "galaxy", "nebula",
        ],
    ),
    (
        DescriptorCategory::Emotions,
        &[
            "joy", "calm", "peace", "energy", "passion", "serenity", "mystery", "dream", "magic",
            "echo", "whisper", "sigh",
        ],
    ),
    (
        DescriptorCategory::Endings,
        &["like", "tone", "shade", "tint", "hue", "color", "colour"],
    ),
    (
        DescriptorCategory::Crayola,
        &["crayola", "crayolablue", "crayolagreen", "crayolapink"],
    ),
    (DescriptorCategory::Other, &["based", "web", "traditional"]),
];

const KNOWN_COMPOUNDS: &[&str] = &[
    "navyblue", "babyblue", "steelblue", "bluegreen", "redorange", "purpleblue",
    "greenishyellow", "olivegreen", "purplepink", "redbrown", "yellowgreen", "blueviolet",
    "redviolet", "blueblack", "redyellow", "greenblue", "orangered", "yelloworange",
    "greenyellow", "purplered", "pinkpurple", "brownred", "grayblue", "graygreen", "grayred",
    "grayyellow", "graypink", "graybrown", "graypurple", "browngray", "purplegray", "pinkgray",
    "yellowgray", "greengray", "bluegray", "redgray", "orangebrown", "yellowishgreen",
    "greenishblue", "purplishblue", "bluishpurple", "reddishorange", "orangishred",
    "yellowishorange", "orangishyellow", "bluishgreen", "purplishred", "reddishpurple",
    "pinkishpurple", "purplishpink", "brownishred", "reddishbrown", "grayishblue",
    "blueishgray", "grayishgreen", "greenishgray", "grayishred", "reddishgray",
    "grayishyellow", "yellowishgray", "grayishpurple", "purplishgray", "grayishpink",
    "pinkishgray", "grayishbrown", "brownishgray", "airforceblue", "alizarincrimson",
    "amaranthlight", "amaranthmagenta", "amaranthpink", "amaranthpurple", "americanrose",
    "anthracitegray", "antiquewhite", "apricotcrayola", "aquamarinecrayola", "armygreen",
    "ashgray", "atomictangerine", "azureblue", "azuresky", "basaltgray", "beigebrown",
    "beigegray", "beigered", "bluebell", "bluecrayola", "bondiblue", "bottlegreen", "brickred",
    "brilliantblue", "brilliantgreen", "cadetblue", "cadetbluecrayola", "cadmiumgreen",
    "camouflagegreen", "candypink", "capriblue", "caribbeangreen", "carminepink", "carminered",
    "carrotorange", "cerulean", "chestnutbrown", "chinesered", "claybrown", "cobaltblue",
    "coralred", "cornflowerblue", "cornyellow", "dahliayellow", "darkimperialblue",
    "darkmidnightblue", "darkslategray", "dartmouthgreen", "deepamaranth", "deepcarmine",
    "deepfuchsia", "diamondblue", "dodgerblue", "dogwoodrose", "dustygray", "electricblue",
    "emeraldgreen", "ferngreen", "ferrarired", "fieryredorange", "firegreen", "firemagenta",
    "fireorange", "firered", "firesienna", "fluorescentbright", "forestgreen", "fuchsiapink",
    "gentianblue", "ghostwhite", "goldcrayola", "goldenbirch", "goldenchestnut", "goldenrod",
    "graphiteblack", "graphitegrey", "grayishbrown", "grayisholive", "grayishviolet",
    "greenbluecrayola", "greencrayola", "greenyellowcrayola", "greyasparagus", "greybeige",
    "greyconcrete", "greykhaki", "greyolive", "greysilk", "heatherpurple", "honeyyellow",
    "huntergreen", "indiagreen", "indianred", "indigocrayola", "infrared",
    "internationalkleinblue", "internationalorange", "junglegreen", "kellygreen", "laserlemon",
    "lavenderblue", "lavenderblush", "lavendercrayola", "lavenderrose", "lawngreen",
    "leafygreen", "leafygreencrayola", "lemonchiffon", "lemonlime", "lemonyellow",
    "lemonyellowcrayola", "lightblue", "lightcoral", "lightcyan", "lightgreen", "lightpink",
    "lightseagreen", "lightskyblue", "lightslategrey", "lightsteelblue", "lightturquoise",
    "lightyellow", "limegreen", "magentacrayola", "magicmint", "mangotango", "maygreen",
    "melonyellow", "midnightblue", "midnightgreen", "mignonettegreen", "mintcream",
    "mintgreen", "mintturquoise", "mossgreen", "mountbattenpink", "mousegrey",
    "narcissusyellow", "navajowhite", "nightblue", "oceanblue", "ochrebrown", "olivedrab",
    "olivegreencrayola", "opalgreen", "orangepeach", "orangeyellow", "orientred", "oxidered",
    "palecornflower", "palegoldenrod", "palegreen", "palelavender", "palemagenta", "palepink",
    "palepurple", "palesilver", "palespringbud", "paleturquoise", "palevioletred",
    "paleyellow", "pastelblue", "pastelgreen", "pastelorange", "pastelpink",
    "pastelturquoise", "pastelyellow", "patinagreen", "peachcrayola", "peachyellow",
    "peargreen", "pearlcardinal", "persianblue", "persiangreen", "persianindigo",
    "persianred", "persianrose", "pigeonblue", "piggypink", "pigmentedgreen", "pinegreen",
    "pinegreencrayola", "pinkcarnation", "poppyred", "powderblue", "prussianblue",
    "purpleheart", "purplemountain", "purplepizza", "quartzgray", "rapeseedyellow",
    "raspberryred", "raspberryrose", "rawumber", "redcrayola", "redorangecrayola",
    "redvioletcrayola", "roseebony", "rosegold", "rosequartz", "rosevale", "rosybrown",
    "royalblue", "royalpurple", "rubyred", "saddlebrown", "salmoncrayola", "salmonorange",
    "salmonred", "sandybrown", "sandyyellow", "sapgreen", "sapphireblue", "scarlet",
    "screaminggreen", "seagreen", "seagreencrayola", "sealbrown", "selectiveyellow",
    "shamrockgreen", "silkcrayola", "silvergray", "skyblue", "slateblue", "springgreen",
    "springgreencrayola", "stonegrey", "strawberryred", "swampgreen", "tangerinetango",
    "tarpaulingray", "teagreen", "ticklemepink", "turquoiseblue", "turquoisegreen",
    "unmellowyellow", "velvetbeige", "velvetcream", "velvetsand", "velvettaupe",
    "vibrantorangepeel", "walnutbrown", "waterblue", "wettropicalforest", "whitealuminum",
    "whitegreen", "wildblueyonder", "yellowbroom", "yellowcrayola", "yellowcurry",
    "yellowgold", "yellowgreencrayola", "yellowivory", "yellowochre", "yelloworangecrayola",
    "yellowsulfur",
];
