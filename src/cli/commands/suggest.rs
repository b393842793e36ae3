use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::intelligence::TaskIntelligence;
use crate::utils::describe_priority;

pub fn handle(cmd: &Commands, intelligence: &TaskIntelligence) -> AppResult<()> {
    if let Commands::Suggest { text, json } = cmd {
        let s = intelligence.suggest(text);

        if *json {
            let out = serde_json::to_string_pretty(&s)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{}", out);
            return Ok(());
        }

        println!("Category : {} {}", s.category.icon(), s.category.to_db_str());
        println!("Priority : {}", describe_priority(s.priority));
        if let Some(place) = &s.place_hint {
            println!("Place    : {}", place);
        }
        println!("Next steps:");
        for step in &s.next_steps {
            let wrapped = textwrap::fill(step, textwrap::Options::new(72).subsequent_indent("     "));
            println!("  • {}", wrapped);
        }
    }
    Ok(())
}
