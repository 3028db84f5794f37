use crate::domain::entities::ScaffoldRequest;

use super::title_case;

pub(super) fn env_file(request: &ScaffoldRequest) -> String {
    let name = request.service_name().as_str();
    let upper = name.to_uppercase();
    let title = title_case(name);
    let port = request.port();
    format!(
        "#\n\
         # {upper} SERVICE - Specific Configuration\n\
         # Loaded after root .env (can override common variables if needed)\n\
         #\n\
         \n\
         # Server Port ({title} Service)\n\
         PORT={port}\n"
    )
}

pub(super) fn readme(request: &ScaffoldRequest) -> String {
    let title = title_case(request.service_name().as_str());
    let package = request.service_name().package_name();
    let port = request.port();
    format!(
        r#"# {title} Service

Port: {port}

## Running

```bash
pnpm --filter {package} start
pnpm --filter {package} dev
```

## Health Check

```bash
curl http://localhost:{port}/api/health
```
"#
    )
}
