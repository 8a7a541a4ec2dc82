use std::{env, fs::read_to_string, process::exit, rc::Rc, time::Instant};

use icss::{
    checker::checker::Checker, collect_errors, display_error, evaluator::evaluator::Evaluator,
    generator::generator::generate, lexer::lexer::tokenize, parser::parser::parse,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: icss <file>");
        exit(1);
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            exit(1);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(String::from(file_name))) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(error, &source);
            exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let mut stylesheet = match parse(tokens, Rc::new(String::from(file_name))) {
        Ok(stylesheet) => stylesheet,
        Err(error) => {
            display_error(error, &source);
            exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());

    let check_start = Instant::now();
    let mut checker = Checker::new();
    checker.check(&mut stylesheet);

    println!("Checked in {:?}", check_start.elapsed());

    let errors = collect_errors(&stylesheet);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("{}", error);
        }
        exit(1);
    }

    let eval_start = Instant::now();
    let mut evaluator = Evaluator::new();
    evaluator.apply(&mut stylesheet);

    println!("Evaluated in {:?}", eval_start.elapsed());
    println!("Total time: {:?}", start.elapsed());

    print!("{}", generate(&stylesheet));
}
