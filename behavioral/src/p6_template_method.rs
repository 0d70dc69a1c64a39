// Pattern 6: Template Method
// The trait's default method fixes the skeleton of the algorithm; concrete
// types only fill in the individual steps and never control the order.

trait BuildPipeline {
    fn compile(&self) -> String;
    fn package(&self) -> String;

    // Template method: compile first, package second, always.
    fn run(&self) -> Vec<String> {
        vec![self.compile(), self.package()]
    }
}

struct DebugBuild;

impl BuildPipeline for DebugBuild {
    fn compile(&self) -> String {
        "debug build: compiling without optimizations".to_string()
    }

    fn package(&self) -> String {
        "debug build: packaging with symbols kept".to_string()
    }
}

struct ReleaseBuild;

impl BuildPipeline for ReleaseBuild {
    fn compile(&self) -> String {
        "release build: compiling with optimizations".to_string()
    }

    fn package(&self) -> String {
        "release build: packaging a stripped binary".to_string()
    }
}

fn run_pipeline(name: &str, pipeline: &dyn BuildPipeline) {
    println!("Using {}:", name);
    for step in pipeline.run() {
        println!("  {}", step);
    }
}

fn main() {
    println!("=== Template Method Demo ===\n");

    run_pipeline("DebugBuild", &DebugBuild);
    println!();
    run_pipeline("ReleaseBuild", &ReleaseBuild);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_template_fixes_the_step_order() {
        assert_eq!(
            DebugBuild.run(),
            vec![
                "debug build: compiling without optimizations",
                "debug build: packaging with symbols kept",
            ]
        );
    }

    #[test]
    fn test_each_variant_supplies_its_own_steps() {
        assert_eq!(
            ReleaseBuild.run(),
            vec![
                "release build: compiling with optimizations",
                "release build: packaging a stripped binary",
            ]
        );
    }

    #[test]
    fn test_steps_run_once_each_in_order() {
        struct Recorder {
            calls: RefCell<Vec<&'static str>>,
        }

        impl BuildPipeline for Recorder {
            fn compile(&self) -> String {
                self.calls.borrow_mut().push("compile");
                "compile".to_string()
            }

            fn package(&self) -> String {
                self.calls.borrow_mut().push("package");
                "package".to_string()
            }
        }

        let recorder = Recorder {
            calls: RefCell::new(Vec::new()),
        };
        recorder.run();
        assert_eq!(*recorder.calls.borrow(), vec!["compile", "package"]);
    }
}
