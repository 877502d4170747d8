//! Behavioral Pattern: Template Method
//! Example: A fixed algorithm skeleton with swappable steps
//!
//! Run with: cargo run --bin b11_template_method

// =============================================================================
// Example 1: File converter with default, required and optional steps
// =============================================================================

/// The template method `convert` defines the skeleton of the
/// algorithm; implementors redefine individual steps without being
/// able to change the call sequence.
pub trait FileConverter {
    fn convert(&self) -> Vec<String> {
        let mut steps = Vec::new();
        if let Some(step) = self.before_steps() {
            steps.push(step);
        }
        steps.push(self.open_file());
        steps.push(self.validate());
        steps.push(self.make_conversion());
        steps.push(self.close_file());
        if let Some(step) = self.after_steps() {
            steps.push(step);
        }
        steps
    }

    // Default implementations of some steps.
    fn open_file(&self) -> String {
        "Step1. Read from file..".to_string()
    }

    fn close_file(&self) -> String {
        "Step4. Close file descriptor..".to_string()
    }

    // These steps have to be implemented by every converter.
    fn validate(&self) -> String;

    fn make_conversion(&self) -> String;

    // Optional hooks provide additional extension points.
    fn before_steps(&self) -> Option<String> {
        None
    }

    fn after_steps(&self) -> Option<String> {
        None
    }
}

pub struct PdfFileConverter;

impl FileConverter for PdfFileConverter {
    fn validate(&self) -> String {
        "Step2. Validate PDF file..".to_string()
    }

    fn make_conversion(&self) -> String {
        "Step3. Convert PDF file..".to_string()
    }
}

pub struct CsvFileConverter;

impl FileConverter for CsvFileConverter {
    fn validate(&self) -> String {
        "Step2. Validate CSV file..".to_string()
    }

    fn make_conversion(&self) -> String {
        "Step3. Convert CSV file..".to_string()
    }
}

// =============================================================================
// Example 2: Build pipeline where only the deploy step varies
// =============================================================================

pub trait BuildPipeline {
    fn build(&self) -> Vec<String> {
        vec![self.create(), self.init(), self.test(), self.deploy()]
    }

    fn create(&self) -> String {
        "Creating an application..".to_string()
    }

    fn init(&self) -> String {
        "Initialization..".to_string()
    }

    fn test(&self) -> String {
        "Running tests..".to_string()
    }

    fn deploy(&self) -> String;
}

pub struct AndroidBuilder;

impl BuildPipeline for AndroidBuilder {
    fn deploy(&self) -> String {
        "Deploying Android application!".to_string()
    }
}

pub struct IosBuilder;

impl BuildPipeline for IosBuilder {
    fn deploy(&self) -> String {
        "Deploying iOS application!".to_string()
    }
}

fn main() {
    println!("=== PDF conversion ===");
    for step in PdfFileConverter.convert() {
        println!("{}", step);
    }

    println!("\n=== Android build ===");
    for step in AndroidBuilder.build() {
        println!("{}", step);
    }

    /* Output:
    === PDF conversion ===
    Step1. Read from file..
    Step2. Validate PDF file..
    Step3. Convert PDF file..
    Step4. Close file descriptor..

    === Android build ===
    Creating an application..
    Initialization..
    Running tests..
    Deploying Android application! */
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converter_steps_run_in_fixed_order() {
        assert_eq!(
            PdfFileConverter.convert(),
            vec![
                "Step1. Read from file..",
                "Step2. Validate PDF file..",
                "Step3. Convert PDF file..",
                "Step4. Close file descriptor..",
            ]
        );
    }

    #[test]
    fn converters_only_differ_in_their_own_steps() {
        let pdf = PdfFileConverter.convert();
        let csv = CsvFileConverter.convert();

        assert_eq!(pdf[0], csv[0]);
        assert_eq!(pdf[3], csv[3]);
        assert_ne!(pdf[1], csv[1]);
        assert_ne!(pdf[2], csv[2]);
    }

    #[test]
    fn optional_hooks_extend_the_skeleton() {
        struct AuditedConverter;

        impl FileConverter for AuditedConverter {
            fn validate(&self) -> String {
                "validate".to_string()
            }

            fn make_conversion(&self) -> String {
                "convert".to_string()
            }

            fn after_steps(&self) -> Option<String> {
                Some("audit trail written".to_string())
            }
        }

        let steps = AuditedConverter.convert();
        assert_eq!(steps.last().map(String::as_str), Some("audit trail written"));
        assert_eq!(steps.len(), 5);
    }

    #[test]
    fn pipelines_share_everything_but_deploy() {
        let android = AndroidBuilder.build();
        let ios = IosBuilder.build();

        assert_eq!(android[..3], ios[..3]);
        assert_eq!(android[3], "Deploying Android application!");
        assert_eq!(ios[3], "Deploying iOS application!");
    }
}
