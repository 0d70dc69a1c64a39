// Pattern 6: Bridge
// Two hierarchies that vary independently: remotes (the abstraction) and
// devices (the implementation). A remote owns a boxed device and works
// with any of them; adding a device never touches the remotes, and a new
// remote works with every existing device.

// Implementor side.
trait Device {
    fn turn_on(&self) -> String;
    fn turn_off(&self) -> String;
    fn set_volume(&self, volume: u32) -> String;
}

struct Tv;

impl Device for Tv {
    fn turn_on(&self) -> String {
        "Turning on the TV.".to_string()
    }

    fn turn_off(&self) -> String {
        "Turning off the TV.".to_string()
    }

    fn set_volume(&self, volume: u32) -> String {
        format!("Setting TV volume to {}.", volume)
    }
}

struct Radio;

impl Device for Radio {
    fn turn_on(&self) -> String {
        "Turning on the Radio.".to_string()
    }

    fn turn_off(&self) -> String {
        "Turning off the Radio.".to_string()
    }

    fn set_volume(&self, volume: u32) -> String {
        format!("Setting Radio volume to {}.", volume)
    }
}

// Abstraction side.
trait Remote {
    fn power_on(&self) -> String;
    fn power_off(&self) -> String;
}

struct BasicRemote {
    device: Box<dyn Device>,
}

impl BasicRemote {
    fn new(device: Box<dyn Device>) -> Self {
        BasicRemote { device }
    }
}

impl Remote for BasicRemote {
    fn power_on(&self) -> String {
        format!("Basic Remote: {}", self.device.turn_on())
    }

    fn power_off(&self) -> String {
        format!("Basic Remote: {}", self.device.turn_off())
    }
}

struct AdvancedRemote {
    device: Box<dyn Device>,
}

impl AdvancedRemote {
    fn new(device: Box<dyn Device>) -> Self {
        AdvancedRemote { device }
    }

    // Only the refined abstraction offers volume control.
    fn set_volume(&self, volume: u32) -> String {
        format!("Advanced Remote: {}", self.device.set_volume(volume))
    }
}

impl Remote for AdvancedRemote {
    fn power_on(&self) -> String {
        format!("Advanced Remote: {}", self.device.turn_on())
    }

    fn power_off(&self) -> String {
        format!("Advanced Remote: {}", self.device.turn_off())
    }
}

fn main() {
    println!("=== Bridge Pattern Demo ===\n");

    let basic = BasicRemote::new(Box::new(Tv));
    println!("{}", basic.power_on());
    println!("{}", basic.power_off());

    let advanced = AdvancedRemote::new(Box::new(Radio));
    println!("{}", advanced.power_on());
    println!("{}", advanced.power_off());
    println!("{}", advanced.set_volume(10));

    // Either side swaps freely.
    println!("\nSame remote type, different device:");
    let advanced_tv = AdvancedRemote::new(Box::new(Tv));
    println!("{}", advanced_tv.set_volume(3));
}
