// Pattern 1: Adapter
// The client is written against `Thermometer` and reads Celsius. The
// legacy sensor only speaks Fahrenheit. The adapter implements the
// client's trait, owns the legacy object, and translates every call.

// Target interface: what client code expects to work with.
trait Thermometer {
    fn read_celsius(&self) -> f64;
}

// A modern sensor that already fits.
struct CelsiusProbe {
    reading: f64,
}

impl Thermometer for CelsiusProbe {
    fn read_celsius(&self) -> f64 {
        self.reading
    }
}

// Adaptee: incompatible interface, cannot be changed.
struct LegacySensor {
    reading_fahrenheit: f64,
}

impl LegacySensor {
    fn read_fahrenheit(&self) -> f64 {
        self.reading_fahrenheit
    }
}

// The adapter wraps the adaptee and converts on every read.
struct SensorAdapter {
    legacy: LegacySensor,
}

impl Thermometer for SensorAdapter {
    fn read_celsius(&self) -> f64 {
        (self.legacy.read_fahrenheit() - 32.0) * 5.0 / 9.0
    }
}

// Client code: it never learns which sensor is behind the trait.
fn report(label: &str, thermometer: &dyn Thermometer) -> String {
    format!("{}: {:.1} C", label, thermometer.read_celsius())
}

fn main() {
    println!("=== Adapter Pattern Demo ===\n");

    let probe = CelsiusProbe { reading: 25.0 };
    println!("{}", report("Modern probe", &probe));

    let legacy = LegacySensor {
        reading_fahrenheit: 212.0,
    };
    println!("Legacy sensor raw reading: {:.1} F", legacy.read_fahrenheit());

    let adapted = SensorAdapter { legacy };
    println!("{}", report("Adapted legacy sensor", &adapted));
}
