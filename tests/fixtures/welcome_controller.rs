// trellis-file-type: trellis-controller
// Copyright (c) 2026 - oscar <oscar@localhost>

// .. controller:: Welcome
//     :platform: Linux
//     :synopsis: None
//
// .. controllerauthor:: oscar <oscar@localhost>

use std::sync::Arc;

use trellis::prelude::*;

/// None
pub struct Welcome {
    state: ControllerState,
}

impl Welcome {
    pub fn new() -> Self {
        // Put your initialization code here
        Self {
            state: ControllerState::new(),
        }
    }

    async fn root(self: Arc<Self>, _request: Request, _params: PathParams) -> Reply {
        Reply::ok("I am the Welcome, hello world!")
    }
}

impl Default for Welcome {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for Welcome {
    fn name(&self) -> &str {
        "Welcome"
    }

    fn route_prefix(&self) -> &str {
        ""
    }

    fn state(&self) -> &ControllerState {
        &self.state
    }

    fn routes(self: Arc<Self>, routes: &mut Routes) {
        routes.bind("/", &self, Self::root);
    }
}
