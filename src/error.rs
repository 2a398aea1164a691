// Copyright 2019 Zhizhesihai (Beijing) Technology Limited.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// See the License for the specific language governing permissions and
// limitations under the License.

use core::search;

error_chain! {
    types {
        Error, ErrorKind, ResultExt, Result;
    }
    errors {
        IllegalArgument(desc: String) {
            description(desc)
            display("Illegal argument: {}", desc)
        }
    }

    foreign_links {
        IoError(::std::io::Error);
        FromUtf8Err(::std::string::FromUtf8Error);
        SerdeJsonError(::serde_json::Error);
    }

    links {
        Search(search::Error, search::ErrorKind);
    }
}
