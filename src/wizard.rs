//! The configuration questionnaire
//!
//! A strictly sequential pipeline of prompt steps with forward-only
//! branching. The only loop is the PHP extension selection, which re-enters
//! its own sub-steps until the user confirms a set or submits nothing
//! usable.

use crate::{
    answers::{AnswerRecord, Database, MonoRepo, PhpVersion, Queue, StarterKit, TestingFramework},
    config::WizardConfig,
    constants::{DEFAULT_PHP_EXTENSIONS, DOCKER_NETWORKS_KEY, PHP_EXTENSIONS_DOCS_URL},
    error::{Error, Result},
    prompt::{
        ConfirmationConfig, MultipleChoiceConfig, PromptProvider, SingleChoiceConfig,
        TextPromptConfig,
    },
    validation::{parse_extension_list, validate_server_contact},
};

/// Prompt labels, shared with the test suite so scripted runs can address
/// each step by its exact wording.
pub mod labels {
    pub const PROJECT_NAME: &str = "What is the name of your project?";
    pub const SERVER_CONTACT: &str = "🤖 Server Contact";
    pub const REVERSE_PROXY: &str = "Do you already have a reverse proxy in development?";
    pub const NETWORK: &str =
        "Select the network to which the services should be attached.";
    pub const PHP_VERSION: &str = "👉 What PHP version would you like to use?";
    pub const PHP_EXTENSIONS: &str =
        "Enter comma separated extensions below or press ENTER to use default extensions.";
    pub const CONFIRM_EXTENSIONS: &str = "Do you confirm these extensions?";
    pub const DATABASE: &str = "Which database will your application use?";
    pub const STARTER_KIT: &str = "Would you like to install a starter kit?";
    pub const BREEZE_STACK: &str = "Which Breeze stack would you like to install?";
    pub const JETSTREAM_STACK: &str = "Which Jetstream stack would you like to install?";
    pub const OPTIONAL_FEATURES: &str = "Would you like any optional features?";
    pub const DARK_MODE: &str = "Would you like dark mode support?";
    pub const MONO_REPO: &str = "Do you want to initialize a monorepo with Nuxt or Next?";
    pub const TESTING_FRAMEWORK: &str = "Which testing framework do you prefer?";
    pub const QUEUE: &str = "Which Queue Service will your application use?";
    pub const QUEUE_DRIVER: &str = "What service to use for queues?";
    pub const HORIZON_DRIVER: &str = "What service to use for Horizon?";
    pub const JS_PACKAGE_MANAGER: &str = "Choose your JavaScript package manager";
    pub const INITIALIZE_GIT: &str = "Would you like to initialize a Git repository?";
}

const PHP_VERSION_OPTIONS: &[(PhpVersion, &str)] = &[
    (PhpVersion::Php84, "PHP 8.4 (Recommended)"),
    (PhpVersion::Php83, "PHP 8.3"),
    (PhpVersion::Php82, "PHP 8.2"),
];

const DATABASE_OPTIONS: &[(Database, &str)] = &[
    (Database::Sqlite, "SQLite"),
    (Database::Mysql, "MySQL"),
    (Database::Mariadb, "MariaDB"),
    (Database::Postgres, "PostgreSQL"),
];

const STARTER_KIT_OPTIONS: &[(StarterKit, &str)] = &[
    (StarterKit::None, "No starter kit"),
    (StarterKit::Breeze, "Laravel Breeze"),
    (StarterKit::Jetstream, "Laravel Jetstream"),
];

const BREEZE_STACKS: &[(&str, &str)] = &[
    ("blade", "Blade with Alpine"),
    ("livewire", "Livewire (Volt Class API) with Alpine"),
    ("livewire-functional", "Livewire (Volt Functional API) with Alpine"),
    ("react", "React with Inertia"),
    ("vue", "Vue with Inertia"),
    ("api", "API only"),
];

const BREEZE_FRONTEND_OPTIONS: &[(&str, &str)] = &[
    ("dark", "Dark mode"),
    ("ssr", "Inertia SSR"),
    ("typescript", "TypeScript"),
    ("eslint", "ESLint with Prettier"),
];

const JETSTREAM_STACKS: &[(&str, &str)] =
    &[("livewire", "Livewire"), ("inertia", "Vue with Inertia")];

const JETSTREAM_OPTIONS: &[(&str, &str)] = &[
    ("api", "API support"),
    ("dark", "Dark mode"),
    ("verification", "Email verification"),
    ("teams", "Team support"),
];

const MONO_REPO_OPTIONS: &[(MonoRepo, &str)] = &[
    (MonoRepo::None, "No, I'm not a fan of monorepo."),
    (MonoRepo::Nuxt, "Yes, Nuxt, because you're the Vue to my heart!"),
    (MonoRepo::Next, "Yes, Next, because React-ions speak louder than words!"),
];

const TESTING_FRAMEWORK_OPTIONS: &[(TestingFramework, &str)] =
    &[(TestingFramework::Pest, "Pest"), (TestingFramework::PhpUnit, "PHPUnit")];

const QUEUE_OPTIONS: &[(Queue, &str)] = &[
    (Queue::None, "None"),
    (Queue::Horizon, "Horizon (Recommended)"),
    (Queue::Queue, "Queues native"),
];

const QUEUE_DRIVERS: &[(&str, &str)] = &[
    ("valkey", "Valkey (Recommended)"),
    ("redis", "Redis"),
    ("database", "Database"),
];

const HORIZON_DRIVERS: &[(&str, &str)] =
    &[("valkey", "Valkey (Recommended)"), ("redis", "Redis")];

const FEATURE_OPTIONS: &[(&str, &str)] =
    &[("schedule", "Task Scheduling"), ("reverb", "Reverb")];

const JS_PACKAGE_MANAGERS: &[(&str, &str)] =
    &[("npm", "npm"), ("yarn", "yarn"), ("pnpm", "pnpm"), ("bun", "bun")];

/// Walks the user through the questionnaire and assembles the answer record.
pub struct Wizard<'a, P: PromptProvider> {
    provider: &'a P,
    config: &'a WizardConfig,
    answers: AnswerRecord,
}

impl<'a, P: PromptProvider> Wizard<'a, P> {
    pub fn new(config: &'a WizardConfig, provider: &'a P) -> Self {
        Self { provider, config, answers: AnswerRecord::default() }
    }

    /// Run the full questionnaire and return the finished record.
    pub fn run(mut self) -> Result<AnswerRecord> {
        self.provider.show_info("🚀 Let's get Laravel launched!")?;

        self.prompt_for_project_name()?;
        self.prompt_for_server_contact()?;
        self.prompt_for_reverse_proxy()?;
        self.prompt_for_php_version()?;
        self.prompt_for_php_extensions()?;
        self.prompt_for_database()?;
        self.prompt_for_starter_kit()?;
        self.prompt_for_queue()?;
        self.prompt_for_features()?;
        self.prompt_for_javascript_package_manager()?;
        self.prompt_for_initialize_git()?;

        log::debug!(
            "Questionnaire complete for project '{}'",
            self.answers.project_name
        );
        Ok(self.answers)
    }

    fn prompt_for_project_name(&mut self) -> Result<()> {
        let mut config = TextPromptConfig::new(labels::PROJECT_NAME);
        config.default = Some(self.answers.project_name.clone());
        self.answers.project_name = self.provider.prompt_text(&config)?;
        Ok(())
    }

    fn prompt_for_server_contact(&mut self) -> Result<()> {
        let mut config = TextPromptConfig::new(labels::SERVER_CONTACT);
        config.placeholder = Some("E.g. admin@example.com".to_string());
        config.hint = Some(
            "Set an email contact who should be notified for Let's Encrypt SSL \
             renewals and other system alerts."
                .to_string(),
        );
        config.validate = Some(validate_server_contact);
        self.answers.server_contact = self.provider.prompt_text(&config)?;
        Ok(())
    }

    fn prompt_for_reverse_proxy(&mut self) -> Result<()> {
        let has_proxy =
            self.confirm(labels::REVERSE_PROXY, false, Some("If you don't know, select no."))?;
        self.answers.needs_traefik = !has_proxy;

        if !self.answers.needs_traefik {
            self.answers.network = self.select_network()?;
        }
        Ok(())
    }

    /// Offer the networks supplied by the environment configuration. An
    /// empty list is a configuration error, not a prompt outcome.
    fn select_network(&self) -> Result<String> {
        if self.config.docker_networks.is_empty() {
            return Err(Error::ConfigKeyMissing { key: DOCKER_NETWORKS_KEY });
        }

        let config = SingleChoiceConfig {
            prompt: labels::NETWORK.to_string(),
            choices: self.config.docker_networks.clone(),
            default_index: None,
        };
        let index = self.provider.prompt_single_choice(&config)?;
        self.config.docker_networks.get(index).cloned().ok_or_else(|| {
            Error::InvalidInput(format!(
                "selection {index} is out of range for '{}'",
                labels::NETWORK
            ))
        })
    }

    fn prompt_for_php_version(&mut self) -> Result<()> {
        self.answers.php_version =
            self.select_from(labels::PHP_VERSION, PHP_VERSION_OPTIONS, None)?;
        Ok(())
    }

    fn prompt_for_php_extensions(&mut self) -> Result<()> {
        loop {
            self.provider.show_info(&extension_instructions())?;

            let mut config = TextPromptConfig::new(labels::PHP_EXTENSIONS);
            config.allow_empty = true;
            let input = self.provider.prompt_text(&config)?;

            if input.is_empty() {
                self.answers.php_extensions = Vec::new();
                break;
            }

            let extensions = parse_extension_list(&input);
            if extensions.is_empty() {
                // Every token was blank after trimming: fall back to the
                // default extensions without asking for confirmation.
                self.answers.php_extensions = Vec::new();
                break;
            }

            self.provider
                .show_info(&extension_review(self.answers.php_version, &extensions))?;
            if self.confirm(labels::CONFIRM_EXTENSIONS, true, None)? {
                self.answers.php_extensions = extensions;
                break;
            }

            self.provider.show_info("Returning to extension selection...")?;
        }
        Ok(())
    }

    fn prompt_for_database(&mut self) -> Result<()> {
        self.answers.database = self.select_from(labels::DATABASE, DATABASE_OPTIONS, None)?;
        Ok(())
    }

    fn prompt_for_starter_kit(&mut self) -> Result<()> {
        self.answers.starter_kit =
            self.select_from(labels::STARTER_KIT, STARTER_KIT_OPTIONS, None)?;

        match self.answers.starter_kit {
            StarterKit::Breeze => self.prompt_for_breeze_options()?,
            StarterKit::Jetstream => self.prompt_for_jetstream_options()?,
            StarterKit::None => {}
        }

        self.prompt_for_testing_framework()
    }

    fn prompt_for_breeze_options(&mut self) -> Result<()> {
        let stack = self.select_from(labels::BREEZE_STACK, BREEZE_STACKS, None)?;
        self.answers.starter_kit_stack = stack.to_string();

        match stack {
            "react" | "vue" => {
                self.answers.starter_kit_options =
                    self.multi_select_from(labels::OPTIONAL_FEATURES, BREEZE_FRONTEND_OPTIONS)?;
            }
            "api" => {
                self.provider
                    .show_info("You have chosen an api stack without a frontend.")?;
                self.answers.mono_repo =
                    self.select_from(labels::MONO_REPO, MONO_REPO_OPTIONS, None)?;
            }
            // blade and the livewire variants only offer dark mode
            _ => {
                self.answers.starter_kit_options =
                    if self.confirm(labels::DARK_MODE, false, None)? {
                        vec!["dark".to_string()]
                    } else {
                        Vec::new()
                    };
            }
        }
        Ok(())
    }

    fn prompt_for_jetstream_options(&mut self) -> Result<()> {
        let stack = self.select_from(labels::JETSTREAM_STACK, JETSTREAM_STACKS, None)?;
        self.answers.starter_kit_stack = stack.to_string();

        self.answers.starter_kit_options =
            self.multi_select_from(labels::OPTIONAL_FEATURES, JETSTREAM_OPTIONS)?;
        Ok(())
    }

    fn prompt_for_testing_framework(&mut self) -> Result<()> {
        self.answers.testing_framework =
            self.select_from(labels::TESTING_FRAMEWORK, TESTING_FRAMEWORK_OPTIONS, Some(0))?;
        Ok(())
    }

    fn prompt_for_queue(&mut self) -> Result<()> {
        self.answers.queue = self.select_from(labels::QUEUE, QUEUE_OPTIONS, None)?;

        match self.answers.queue {
            Queue::Queue => {
                self.answers.queue_driver =
                    self.select_from(labels::QUEUE_DRIVER, QUEUE_DRIVERS, None)?.to_string();
            }
            Queue::Horizon => {
                self.answers.queue_driver = self
                    .select_from(labels::HORIZON_DRIVER, HORIZON_DRIVERS, None)?
                    .to_string();
            }
            Queue::None => {}
        }
        Ok(())
    }

    fn prompt_for_features(&mut self) -> Result<()> {
        self.answers.features =
            self.multi_select_from(labels::OPTIONAL_FEATURES, FEATURE_OPTIONS)?;
        Ok(())
    }

    fn prompt_for_javascript_package_manager(&mut self) -> Result<()> {
        if self.is_api_only_without_mono_repo() {
            log::debug!("Skipping package manager selection for an API-only project");
            return Ok(());
        }

        self.answers.javascript_package_manager = self
            .select_from(labels::JS_PACKAGE_MANAGER, JS_PACKAGE_MANAGERS, None)?
            .to_string();
        Ok(())
    }

    fn is_api_only_without_mono_repo(&self) -> bool {
        self.answers.starter_kit == StarterKit::Breeze
            && self.answers.starter_kit_stack == "api"
            && self.answers.mono_repo == MonoRepo::None
    }

    fn prompt_for_initialize_git(&mut self) -> Result<()> {
        self.answers.initialize_git = self.confirm(labels::INITIALIZE_GIT, true, None)?;
        Ok(())
    }

    // Prompt plumbing

    fn select_from<T: Copy>(
        &self,
        prompt: &str,
        options: &[(T, &str)],
        default_index: Option<usize>,
    ) -> Result<T> {
        let config = SingleChoiceConfig {
            prompt: prompt.to_string(),
            choices: options.iter().map(|(_, label)| (*label).to_string()).collect(),
            default_index,
        };
        let index = self.provider.prompt_single_choice(&config)?;
        options.get(index).map(|(value, _)| *value).ok_or_else(|| {
            Error::InvalidInput(format!("selection {index} is out of range for '{prompt}'"))
        })
    }

    fn multi_select_from(
        &self,
        prompt: &str,
        options: &[(&str, &str)],
    ) -> Result<Vec<String>> {
        let config = MultipleChoiceConfig {
            prompt: prompt.to_string(),
            choices: options.iter().map(|(_, label)| (*label).to_string()).collect(),
            defaults: vec![false; options.len()],
        };
        let indices = self.provider.prompt_multiple_choice(&config)?;

        indices
            .into_iter()
            .map(|index| {
                options.get(index).map(|(value, _)| (*value).to_string()).ok_or_else(
                    || {
                        Error::InvalidInput(format!(
                            "selection {index} is out of range for '{prompt}'"
                        ))
                    },
                )
            })
            .collect()
    }

    fn confirm(&self, prompt: &str, default: bool, hint: Option<&str>) -> Result<bool> {
        self.provider.prompt_confirmation(&ConfirmationConfig {
            prompt: prompt.to_string(),
            default,
            hint: hint.map(str::to_string),
        })
    }
}

fn extension_instructions() -> String {
    format!(
        "Default extensions:\n{}\n\nSee available extensions:\n{}\n\n\
         Enter additional extensions as a comma-separated list (no spaces).\n\
         Example: gd,imagick,intl",
        DEFAULT_PHP_EXTENSIONS.join(", "),
        PHP_EXTENSIONS_DOCS_URL,
    )
}

fn extension_review(php_version: PhpVersion, extensions: &[String]) -> String {
    let listing =
        extensions.iter().map(|ext| format!("- {ext}")).collect::<Vec<_>>().join("\n");
    format!(
        "These extensions names must be supported in the PHP version you selected.\n\
         Learn more here: {}\n\nPHP Version: {}\nExtensions:\n{}",
        PHP_EXTENSIONS_DOCS_URL, php_version, listing,
    )
}
