// trellis-file-type: trellis-controller
// Copyright (c) 2026 - oscar <oscar@localhost>

// .. controller:: Home
//     :platform: Linux
//     :synopsis: Home page
//
// .. controllerauthor:: oscar <oscar@localhost>

use std::sync::Arc;

use trellis::prelude::*;

/// Home page
pub struct Home {
    state: ControllerState,
}

impl Home {
    pub fn new() -> Self {
        // Put your initialization code here
        Self {
            state: ControllerState::new(),
        }
    }

    async fn root(self: Arc<Self>, _request: Request, _params: PathParams) -> Reply {
        Reply::ok("I am the Home, hello world!")
    }
}

impl Default for Home {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for Home {
    fn name(&self) -> &str {
        "Home"
    }

    fn route_prefix(&self) -> &str {
        "/home"
    }

    fn state(&self) -> &ControllerState {
        &self.state
    }

    fn routes(self: Arc<Self>, routes: &mut Routes) {
        routes.bind("/", &self, Self::root);
    }
}
