use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "error-responder")]
pub struct Opt {
    /// Address to bind
    #[structopt(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[structopt(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Per-request timeout in seconds
    #[structopt(long = "timeout-secs", env = "REQUEST_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,
}

impl Opt {
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
