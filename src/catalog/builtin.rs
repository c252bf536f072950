use crate::core::types::CatalogEntry;

/// Locally drawn subject cards.
pub fn placeholders() -> Vec<CatalogEntry> {
    [
        ("mathematics.jpg", "#2E86AB", "∑∫π", "Mathematics symbols and formulas"),
        ("english-literature.jpg", "#A23B72", "📚", "English Literature books and writing"),
        ("chemistry.jpg", "#F18F01", "⚗️", "Chemistry laboratory equipment"),
        ("physics.jpg", "#C73E1D", "⚛️", "Physics symbols and equations"),
        ("computer-science.jpg", "#4A90E2", "</>", "Computer programming and code"),
        ("biology.jpg", "#7FB069", "🧬", "Biology and life sciences"),
        ("art-design.jpg", "#E85D75", "🎨", "Art and creative design"),
        ("music-theory.jpg", "#8B5CF6", "♪♫", "Music theory and notation"),
        ("economics.jpg", "#10B981", "📈", "Economics and finance"),
        ("psychology.jpg", "#F59E0B", "🧠", "Psychology and mind studies"),
        ("history.jpg", "#8B4513", "🏛️", "World History and historical events"),
        ("geography.jpg", "#006400", "🗺️", "Geography and world maps"),
    ]
    .into_iter()
    .map(|(id, color, glyph, description)| CatalogEntry::placeholder(id, color, glyph, description))
    .collect()
}

/// Images the seed data refers to, fetched byte for byte from Wikimedia thumbnails.
pub fn downloads() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::download(
            "math.jpg",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/2/2e/Pi-symbol.svg/480px-Pi-symbol.svg.png",
            "https://commons.wikimedia.org/wiki/File:Pi-symbol.svg",
            "Public Domain",
            "Mathematical Pi symbol",
        ),
        CatalogEntry::download(
            "english.jpg",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/a/ae/Metal_movable_type.jpg/640px-Metal_movable_type.jpg",
            "https://commons.wikimedia.org/wiki/File:Metal_movable_type.jpg",
            "CC BY-SA 3.0",
            "Metal movable type for printing",
        ),
        CatalogEntry::download(
            "science.jpg",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/5/5a/Atom.svg/480px-Atom.svg.png",
            "https://commons.wikimedia.org/wiki/File:Atom.svg",
            "CC BY-SA 4.0",
            "Atom symbol for science",
        ),
        CatalogEntry::download(
            "history.jpg",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/a/af/All_Gizah_Pyramids.jpg/640px-All_Gizah_Pyramids.jpg",
            "https://commons.wikimedia.org/wiki/File:All_Gizah_Pyramids.jpg",
            "CC BY-SA 2.0",
            "Pyramids of Giza",
        ),
        CatalogEntry::download(
            "geography.jpg",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/7/74/Mercator-projection.jpg/640px-Mercator-projection.jpg",
            "https://commons.wikimedia.org/wiki/File:Mercator-projection.jpg",
            "CC BY-SA 3.0",
            "World map in Mercator projection",
        ),
    ]
}

/// Commons file pages, fetched and shrunk to the card box.
pub fn commons() -> Vec<CatalogEntry> {
    [
        ("mathematics.jpg", "Mathematics_formula.svg", "Public Domain", "Mathematics symbols and formulas"),
        ("english-literature.jpg", "Books-aj.svg_aj_ashton_01.svg", "CC BY-SA 3.0", "Stack of books representing literature"),
        ("chemistry.jpg", "Chemistry_lab.svg", "Public Domain", "Chemistry laboratory equipment"),
        ("physics.jpg", "Physics.svg", "Public Domain", "Physics symbols and equations"),
        ("computer-science.jpg", "Computer_code.svg", "Public Domain", "Computer code and programming symbols"),
        ("biology.jpg", "Dna.svg", "Public Domain", "DNA double helix structure"),
        ("art-design.jpg", "Palette.svg", "Public Domain", "Artist palette with colors"),
        ("music-theory.png", "Musical_notes.svg", "Public Domain", "Musical notes and staff"),
        ("economics.jpg", "Finance_chart.svg", "Public Domain", "Economic chart and graph"),
        ("psychology.jpg", "Brain.svg", "Public Domain", "Human brain diagram"),
    ]
    .into_iter()
    .map(|(id, file, license, description)| {
        let page = format!("https://commons.wikimedia.org/wiki/File:{file}");
        CatalogEntry::commons(id, &page, license, description)
    })
    .collect()
}
