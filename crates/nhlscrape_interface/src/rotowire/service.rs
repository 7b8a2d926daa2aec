use crate::errors::Result;

/// Transport for the RotoWire hockey pages. Bodies are returned as raw text.
pub trait RotowireEndpoint {
    fn get(&self, page: &str) -> Result<String>;

    fn starting_goalies_endpoint(&self) -> Result<String> {
        self.get("starting-goalies.php?view=teams")
    }
}

pub type RotowireEndpointHandle = Box<dyn RotowireEndpoint>;
