// src/services/configure.rs

//! Interactive rule configuration.

use crate::error::Result;
use crate::models::{MethodType, RuleConfiguration, Urgency};
use crate::prompt::Prompt;
use crate::utils::label::parse_delay;

/// Ask which methods to use per urgency, then a delay for each chosen pair.
pub fn configure_rules(prompt: &mut dyn Prompt) -> Result<RuleConfiguration> {
    let options: Vec<String> = MethodType::ALL.iter().map(|m| m.label().to_string()).collect();
    let mut builder = RuleConfiguration::builder();
    let mut selections = Vec::with_capacity(Urgency::ALL.len());

    for urgency in Urgency::ALL {
        let question = format!(
            "Choose notification methods for {} urgency",
            urgency.as_str().to_uppercase()
        );
        let picked: Vec<MethodType> = prompt
            .multi_select(&question, &options)?
            .into_iter()
            .map(|i| MethodType::ALL[i])
            .collect();
        builder = builder.select(urgency, &picked);
        selections.push((urgency, picked));
    }

    for (urgency, methods) in selections {
        for method in methods {
            let answer = prompt.input(&format!(
                "Enter delay in minutes for {method} ({urgency} urgency, 0 for immediate)"
            ))?;
            builder = builder.delay(urgency, method, parse_delay(&answer));
        }
    }

    Ok(builder.build())
}
