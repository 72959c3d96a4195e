use crate::{
    cli::Args,
    config::WizardConfig,
    error::Result,
    ioutils::write_answer_record,
    prompt::get_prompt_provider,
    wizard::Wizard,
};

/// Main CLI runner that orchestrates the whole questionnaire workflow
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete workflow: load the environment configuration,
    /// run the questionnaire, persist the record.
    pub fn run(self) -> Result<()> {
        let config = WizardConfig::load(&self.args.config)?;

        let provider = get_prompt_provider();
        let answers = Wizard::new(&config, &provider).run()?;

        write_answer_record(&self.args.output, &answers)?;

        println!("Configuration saved to {}.", self.args.output.display());
        Ok(())
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
