use clap::Parser;

#[derive(Parser)]
#[command(name = "wd")]
#[command(about = "A simple command-line English-Chinese dictionary.")]
#[command(version)]
pub struct Cli {
    /// Word to look up
    #[arg(num_args = 0..)]
    pub word: Vec<String>,
}

impl Cli {
    /// The lookup word, if exactly one was supplied.
    pub fn single_word(&self) -> Option<&str> {
        match self.word.as_slice() {
            [word] => Some(word.as_str()),
            _ => None,
        }
    }
}
