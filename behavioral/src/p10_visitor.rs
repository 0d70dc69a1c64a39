// Pattern 10: Visitor
// New operations over a fixed set of element types, without touching the
// elements. `accept` performs the double dispatch: the element picks the
// matching `visit_*` method, so the visitor gets the concrete type back
// even though the document stores `dyn Element`.

trait Visitor {
    fn visit_paragraph(&mut self, paragraph: &Paragraph);
    fn visit_image(&mut self, image: &Image);
}

trait Element {
    fn accept(&self, visitor: &mut dyn Visitor);
}

struct Paragraph {
    text: String,
}

impl Element for Paragraph {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_paragraph(self);
    }
}

struct Image {
    alt: String,
    width: u32,
    height: u32,
}

impl Element for Image {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_image(self);
    }
}

// First operation: document statistics.
#[derive(Default)]
struct WordCount {
    words: usize,
    images: usize,
}

impl Visitor for WordCount {
    fn visit_paragraph(&mut self, paragraph: &Paragraph) {
        self.words += paragraph.text.split_whitespace().count();
    }

    fn visit_image(&mut self, _image: &Image) {
        self.images += 1;
    }
}

// Second operation: HTML rendering. Neither Paragraph nor Image changed
// to support it.
#[derive(Default)]
struct HtmlExport {
    output: String,
}

impl Visitor for HtmlExport {
    fn visit_paragraph(&mut self, paragraph: &Paragraph) {
        self.output.push_str(&format!("<p>{}</p>\n", paragraph.text));
    }

    fn visit_image(&mut self, image: &Image) {
        self.output.push_str(&format!(
            "<img alt=\"{}\" width=\"{}\" height=\"{}\">\n",
            image.alt, image.width, image.height
        ));
    }
}

fn sample_document() -> Vec<Box<dyn Element>> {
    vec![
        Box::new(Paragraph {
            text: "Design patterns in plain Rust".to_string(),
        }),
        Box::new(Image {
            alt: "class diagram".to_string(),
            width: 640,
            height: 480,
        }),
        Box::new(Paragraph {
            text: "The visitor keeps operations out of the data".to_string(),
        }),
    ]
}

fn main() {
    println!("=== Visitor Pattern Demo ===\n");

    let document = sample_document();

    let mut stats = WordCount::default();
    for element in &document {
        element.accept(&mut stats);
    }
    println!("Words:  {}", stats.words);
    println!("Images: {}", stats.images);

    let mut html = HtmlExport::default();
    for element in &document {
        element.accept(&mut html);
    }
    println!("\nRendered HTML:\n{}", html.output);
}
