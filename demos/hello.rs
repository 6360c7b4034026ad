use scrawl_gen::image::{DynamicImage, Rgb, RgbImage};
use scrawl_gen::layout::Margins;
use scrawl_gen::{fills, Font, Scribe, Template};

fn main() {
    // any TTF or OTF font works; handwriting-style fonts look best
    let path = std::env::args().nth(1).expect("usage: hello <font.ttf>");
    let font = std::fs::read(path).expect("can read font file");
    let font = Font::load(font).expect("can load font");
    let name = font.name().unwrap_or_else(|| "an unnamed font".into());
    println!("writing with {name}");

    // start a scribe and add the font to it
    let mut scribe = Scribe::default();
    let font = scribe.add_font(font);

    // a blank white sheet to write on
    let background = DynamicImage::ImageRgb8(RgbImage::from_pixel(800, 500, Rgb([255; 3])));

    // write at size 48 in ballpoint blue, with a margin around all
    // edges of the sheet of 60 pixels
    let template = Template::new(background, font, 48)
        .and_then(|t| t.with_margins(Margins::all(60)))
        .and_then(|t| t.with_word_spacing(6))
        .and_then(|t| t.with_fill(fills::BALLPOINT))
        .expect("can build template");

    // render the text! every run comes out a little different
    let pages = scribe
        .render("Hello world!", std::slice::from_ref(&template))
        .expect("can start rendering");
    for page in pages {
        let page = page.expect("can render page");
        let name = format!("hello-{}.png", page.index);
        page.image.save(&name).expect("can save page");
        println!("wrote {name}");
    }
}
