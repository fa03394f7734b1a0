use std::{env, fs, path::PathBuf, process::ExitCode, time::Instant};

use tokenizer::classifier::tokens::{Category, ClassificationResult};
use tokenizer::errors::errors::Error;
use tokenizer::process_code;

const SAMPLE_PROGRAM: &str = r#" 'x' As String
                        x = "Hello"
                        Dim y As Float
                        y = 10.6
                         y > 0 Then ) (
                            y = y + 1
                        end if
                        #define MAX 100
                        ' comment"#;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Error> {
    let args: Vec<String> = env::args().collect();

    let source = match args.len() {
        1 => String::from(SAMPLE_PROGRAM),
        2 => {
            let path = PathBuf::from(&args[1]);
            fs::read_to_string(&path).map_err(|source| Error::SourceRead { path, source })?
        }
        _ => return Err(Error::Usage),
    };

    let start = Instant::now();
    let result = process_code(&source);
    println!("Classified {} tokens in {:?}", result.len(), start.elapsed());
    println!();

    print_all_tokens(&result);

    Ok(())
}

fn print_all_tokens(result: &ClassificationResult) {
    for category in Category::ALL {
        print_tokens(result, category);
    }
}

fn print_tokens(result: &ClassificationResult, category: Category) {
    println!("{}", header(category));
    for token in result.tokens(category) {
        println!("{:<20}{}", token.lexeme, token.category);
    }
    println!();
}

fn header(category: Category) -> &'static str {
    match category {
        Category::Number => "Numbers:",
        Category::StringConstant => "String Constants:",
        Category::CharConstant => "Char Constants:",
        Category::PreprocessorDirective => "Preprocessor Directives:",
        Category::Comment => "Comments:",
        Category::ReservedWord => "Reserved Words:",
        Category::Operator => "Operators:",
        Category::Separator => "Separators:",
        Category::Identifier => "Identifiers:",
        Category::UnrecognizedToken => "Errors:",
    }
}
