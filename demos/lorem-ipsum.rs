use scrawl_gen::image::{DynamicImage, Rgb, RgbImage};
use scrawl_gen::layout::Margins;
use scrawl_gen::{fills, Font, Px, Scribe, Template};

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("usage: lorem-ipsum <font.ttf>");
    let font = std::fs::read(path).expect("can read font file");
    let font = Font::load(font).expect("can load font");

    // lead lines by the face's preferred line height at this size
    let line_spacing = (*font.line_height(Px(40.0))).ceil() as u32;

    let mut scribe = Scribe::default();
    let font = scribe.add_font(font);

    let cream = DynamicImage::ImageRgb8(RgbImage::from_pixel(1000, 1400, Rgb([252, 248, 230])));
    let white = DynamicImage::ImageRgb8(RgbImage::from_pixel(1000, 1400, Rgb([255; 3])));

    let odd = Template::new(cream, font, 40)
        .and_then(|t| t.with_margins(Margins::symmetric(100, 120)))
        .and_then(|t| t.with_line_spacing(line_spacing))
        .and_then(|t| t.with_word_spacing(4))
        .and_then(|t| t.with_fill(fills::BALLPOINT))
        .expect("can build template");
    // every other page lands on plain white paper
    let even = odd
        .clone()
        .with_background(white)
        .expect("can build template");

    let text = format!("{}\n\n{}", lipsum::lipsum_title(), lipsum::lipsum(600));

    // a fixed seed makes the whole scrawl reproducible
    let templates = [odd, even];
    let pages = scribe
        .render_seeded(&text, &templates, 42)
        .expect("can start rendering");
    for page in pages {
        let page = page.expect("can render page");
        let name = format!("lorem-ipsum-{}.png", page.index);
        page.image.save(&name).expect("can save page");
        println!("wrote {name}");
    }
}
