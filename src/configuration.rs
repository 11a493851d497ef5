use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;
use std::rc::Rc;

use log::info;
use serde::Deserialize;

use crate::fit::fittask::FitTask;
use crate::fit::fittaskmanager::FitTaskManager;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::manager::managererror::ManagerError;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    fit_task: Vec<serde_json::Value>
}

pub struct Configuration {
    fit_task_manager: Manager<Rc<FitTask>>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            fit_task_manager: FitTaskManager::new()
        }
    }

    /// 不讀檔，直接註冊內建的 parabola / cubic
    pub fn builtin() -> Configuration {
        Configuration {
            fit_task_manager: FitTaskManager::builtin()
        }
    }

    pub fn fit_task_manager(&self) -> &Manager<Rc<FitTask>> {
        &self.fit_task_manager
    }

    pub fn task(&self, name: &str) -> Result<Rc<FitTask>, ManagerError> {
        self.fit_task_manager.get(name)
    }

    pub fn contains_task(&self, name: &str) -> bool {
        self.fit_task_manager.contains(name)
    }

    pub fn task_names(&self) -> Vec<String> {
        self.fit_task_manager.names()
    }

    pub fn from_json_reader<R: Read>(&self, reader: R) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.fit_task_manager.insert_obj_from_json_vec(&json_prop.fit_task)?;
        info!("loaded {} fit task(s)", json_prop.fit_task.len());
        Ok(())
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        self.from_json_reader(BufReader::new(file))
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration::new()
    }
}
