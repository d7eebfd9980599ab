//! Interactive registration wizard.
//!
//! Prompts for each field with inline validation, owns the mutable list of
//! technology rows, and hands the validator a finished snapshot on submit.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input, Password};

use regform::preview;
use regform::rules;
use regform::ui;
use regform::submission::{KnowledgeValue, SubmissionInput, TechInput};
use regform::validate::validate;

/// Run the wizard: collect fields, validate, print the preview.
pub fn cmd_form() -> Result<()> {
    if !atty::is(atty::Stream::Stdin) {
        anyhow::bail!(
            "The form wizard requires an interactive terminal.\n\n\
             For non-interactive use:\n  \
             regform check submission.json\n  \
             regform sample | regform check"
        );
    }

    println!("{}", "Registration".bold());
    println!("============");
    println!();

    let name: String = Input::new()
        .with_prompt("Name")
        .validate_with(|value: &String| rules::name_rule(value).map(|_| ()))
        .interact_text()?;

    let email: String = Input::new()
        .with_prompt("E-mail")
        .validate_with(|value: &String| rules::email_rule(value).map(|_| ()))
        .interact_text()?;

    let password = Password::new()
        .with_prompt("Password")
        .validate_with(|value: &String| rules::password_rule(value).map(|_| ()))
        .interact()?;

    let techs = prompt_techs()?;

    let input = SubmissionInput {
        name,
        email,
        password,
        techs,
    };

    match validate(&input) {
        Ok(output) => {
            println!();
            println!("{}", preview::format_submission(&output));
            Ok(())
        }
        Err(errors) => {
            eprintln!();
            eprintln!("{}", preview::format_errors(&errors));
            std::process::exit(1);
        }
    }
}

/// Collect technology rows until the user has at least two and declines to
/// add more.
fn prompt_techs() -> Result<Vec<TechInput>> {
    let mut techs: Vec<TechInput> = Vec::new();

    println!();
    println!("{}", "Technologies".bold());
    println!(
        "{}",
        ui::colors::secondary("At least two entries, knowledge scored 1-100.")
    );

    loop {
        println!();
        println!("{}", format!("Technology {}", techs.len() + 1).cyan());

        let title: String = Input::new()
            .with_prompt("Title")
            .validate_with(|value: &String| rules::title_rule(value).map(|_| ()))
            .interact_text()?;

        let knowledge: String = Input::new()
            .with_prompt("Knowledge (1-100)")
            .validate_with(|value: &String| {
                rules::knowledge_rule(&KnowledgeValue::from(value.as_str())).map(|_| ())
            })
            .interact_text()?;

        techs.push(TechInput::new(title, knowledge));

        if techs.len() < rules::TECHS_MIN_LEN {
            continue;
        }

        let add_more = Confirm::new()
            .with_prompt("Add another technology?")
            .default(false)
            .interact()?;

        if !add_more {
            break;
        }
    }

    Ok(techs)
}
