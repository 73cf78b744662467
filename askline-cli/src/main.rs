use askline_core::{Menu, PromptError, Prompter, SemanticType};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), PromptError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("askline demo");
    println!("------------");

    let mut prompter = Prompter::stdio();

    let name = prompter.string("name", Some("anonymous"))?;
    let age = prompter.integer("age", Some(0))?;
    let fan = prompter.yes_no("do you like rust?", Some('y'))?;
    println!("hello {name} ({age}), rust fan: {fan}");
    println!();

    let menu = Menu::from_pairs(&[
        ("1", "coerce a typed value"),
        ("2", "read a list of integers"),
        ("3", "extract an email address"),
        ("q", "quit"),
    ])?;

    loop {
        let (key, _) = prompter.selection(&menu, Some("demos"), "enter selection", Some("q"))?;
        match key.as_str() {
            "1" => {
                let v = prompter.value(
                    "anything",
                    &[
                        SemanticType::Boolean,
                        SemanticType::Integer,
                        SemanticType::Float,
                        SemanticType::Str,
                    ],
                    None,
                )?;
                println!("coerced as {}: {v}", v.semantic_type());
            }
            "2" => {
                let batch = prompter.values("numbers", ',', &[SemanticType::Integer], None)?;
                println!("got {} integers", batch.len());
            }
            "3" => {
                let addr = prompter.email("email", None)?;
                println!("address: {addr}");
            }
            _ => break,
        }
        println!();
    }

    prompter.wait_for_enter()?;
    Ok(())
}
