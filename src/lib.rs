pub mod configuration;

pub mod fit {
    pub mod fiterror;
    pub mod pointdump;
    pub mod curvereport;
    pub mod fittask;
    pub mod fittaskmanager;
}

pub mod geometry {
    pub mod point;
    pub mod pointiterator;
    pub mod triangle;
}

pub mod logger;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod polynomial;
        pub mod equation;
        pub mod sampler;
    }
    pub mod linalg {
        pub mod designmatrix;
        pub mod leastsquares;
        pub mod inverse;
    }
}
