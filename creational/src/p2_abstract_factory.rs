// Pattern 2: Abstract Factory
// One factory per theme, each producing a whole family of widgets that
// are guaranteed to match. Client code builds its UI against the factory
// trait, so switching the entire look is a one-line change.

trait Button {
    fn render(&self) -> String;
}

trait Window {
    fn render(&self) -> String;
    // Widgets from the same family compose cleanly.
    fn render_with(&self, button: &dyn Button) -> String;
}

struct LightButton;

impl Button for LightButton {
    fn render(&self) -> String {
        "[ light button ]".to_string()
    }
}

struct DarkButton;

impl Button for DarkButton {
    fn render(&self) -> String {
        "[ dark button ]".to_string()
    }
}

struct LightWindow;

impl Window for LightWindow {
    fn render(&self) -> String {
        "light window".to_string()
    }

    fn render_with(&self, button: &dyn Button) -> String {
        format!("{} showing {}", self.render(), button.render())
    }
}

struct DarkWindow;

impl Window for DarkWindow {
    fn render(&self) -> String {
        "dark window".to_string()
    }

    fn render_with(&self, button: &dyn Button) -> String {
        format!("{} showing {}", self.render(), button.render())
    }
}

trait ThemeFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_window(&self) -> Box<dyn Window>;
}

struct LightTheme;

impl ThemeFactory for LightTheme {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(LightButton)
    }

    fn create_window(&self) -> Box<dyn Window> {
        Box::new(LightWindow)
    }
}

struct DarkTheme;

impl ThemeFactory for DarkTheme {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(DarkButton)
    }

    fn create_window(&self) -> Box<dyn Window> {
        Box::new(DarkWindow)
    }
}

// The client: builds a small UI without naming a single concrete widget.
fn build_ui(factory: &dyn ThemeFactory) -> String {
    let window = factory.create_window();
    let button = factory.create_button();
    window.render_with(button.as_ref())
}

fn main() {
    println!("=== Abstract Factory Pattern Demo ===\n");

    println!("Light theme: {}", build_ui(&LightTheme));
    println!("Dark theme:  {}", build_ui(&DarkTheme));
}
