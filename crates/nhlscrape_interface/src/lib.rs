pub mod errors;
pub mod table;

pub mod boxscore {
    pub mod model;
}

pub mod goalies {
    pub mod model;
}

pub mod nhl {
    pub mod service;
}

pub mod players {
    pub mod model;
}

pub mod rotowire {
    pub mod service;
}

pub mod schedule {
    pub mod model;
}

pub mod teams {
    pub mod model;
}
