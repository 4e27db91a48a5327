use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    mdlpack completions bash > ~/.bash_completion.d/mdlpack\n\n\
                  Generate zsh completions:\n    mdlpack completions zsh > ~/.zfunc/_mdlpack\n\n\
                  Generate fish completions:\n    mdlpack completions fish > ~/.config/fish/completions/mdlpack.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
