//! Template literals for the package scaffold.
//!
//! Content is written verbatim; changing anything here changes what every
//! scaffolded package starts from.

/// Directories created before any file is written.
pub const SCAFFOLD_DIRS: &[&str] = &["src/context", "src/hooks", "src/utils", "tests/hooks"];

/// Files written by the scaffold: relative path and verbatim content.
pub const SCAFFOLD_FILES: &[(&str, &str)] = &[
    ("src/index.ts", INDEX_TS),
    ("src/context/Auth0Provider.tsx", AUTH0_PROVIDER_TSX),
    ("src/hooks/useLogin.ts", USE_LOGIN_TS),
    ("tests/hooks/useLogin.test.tsx", USE_LOGIN_TEST_TSX),
    ("package.json", PACKAGE_JSON),
    ("tsconfig.json", TSCONFIG_JSON),
    (".eslintrc.json", ESLINTRC_JSON),
    (".prettierrc", PRETTIERRC),
    ("jest.config.ts", JEST_CONFIG_TS),
    ("README.md", README_MD),
];

const INDEX_TS: &str = r"export * from 'auth0-acul-js';
export { Auth0Provider } from './context/Auth0Provider';
export { useLogin } from './hooks/useLogin';
export { useUniversalLoginContext } from './hooks/useUniversalLoginContext';
";

const AUTH0_PROVIDER_TSX: &str = r"import React, { createContext, useContext } from 'react';

const UniversalLoginContext = createContext(window.universal_login_context);

export const Auth0Provider: React.FC<{ children: React.ReactNode }> = ({ children }) => {
  return (
    <UniversalLoginContext.Provider value={window.universal_login_context}>
      {children}
    </UniversalLoginContext.Provider>
  );
};

export const useUniversalLoginContext = () => useContext(UniversalLoginContext);
";

const USE_LOGIN_TS: &str = r"import { getLoginIdentifierScreen } from 'auth0-acul-js';

export function useLogin() {
  const screen = getLoginIdentifierScreen();
  return {
    title: screen.title,
    identifier: screen.identifier,
    onSubmit: screen.onSubmit,
  };
}
";

const USE_LOGIN_TEST_TSX: &str = r"import { renderHook } from '@testing-library/react-hooks';
import { useLogin } from '../../src/hooks/useLogin';

test('should return login screen values', () => {
  const { result } = renderHook(() => useLogin());
  expect(result.current).toHaveProperty('title');
  expect(result.current).toHaveProperty('identifier');
});
";

const PACKAGE_JSON: &str = r#"{
  "name": "auth0-acul-react",
  "version": "0.1.0",
  "main": "dist/index.js",
  "types": "dist/index.d.ts",
  "scripts": {
    "build": "tsc",
    "test": "jest"
  },
  "peerDependencies": {
    "react": "^18.0.0"
  },
  "dependencies": {
    "auth0-acul-js": "*"
  },
  "devDependencies": {
    "@types/react": "^18.0.0",
    "typescript": "^5.0.0",
    "jest": "^29.0.0",
    "@testing-library/react-hooks": "^8.0.1",
    "@types/jest": "^29.0.0"
  }
}
"#;

const TSCONFIG_JSON: &str = r#"{
  "compilerOptions": {
    "target": "ES2021",
    "module": "ESNext",
    "lib": ["DOM", "ESNext"],
    "jsx": "react-jsx",
    "moduleResolution": "node",
    "esModuleInterop": true,
    "skipLibCheck": true,
    "strict": true,
    "declaration": true,
    "outDir": "dist",
    "baseUrl": "./src"
  },
  "include": ["src"]
}
"#;

const ESLINTRC_JSON: &str = r#"{
  "extends": ["eslint:recommended", "plugin:react/recommended", "plugin:@typescript-eslint/recommended"],
  "plugins": ["react", "@typescript-eslint"],
  "parser": "@typescript-eslint/parser",
  "parserOptions": {
    "ecmaVersion": 2020,
    "sourceType": "module",
    "ecmaFeatures": { "jsx": true }
  },
  "settings": {
    "react": { "version": "detect" }
  },
  "rules": {}
}
"#;

const PRETTIERRC: &str = r#"{
  "semi": true,
  "singleQuote": true,
  "printWidth": 100,
  "tabWidth": 2,
  "trailingComma": "es5"
}
"#;

const JEST_CONFIG_TS: &str = r"export default {
  preset: 'ts-jest',
  testEnvironment: 'jsdom',
  transform: {
    '^.+\\.tsx?$': 'ts-jest'
  },
  testMatch: ['**/tests/**/*.test.ts?(x)'],
  moduleFileExtensions: ['ts', 'tsx', 'js', 'jsx'],
};
";

const README_MD: &str = "# auth0-acul-react\n\nReact wrapper for `auth0-acul-js` to build custom Universal Login pages with React paradigms.\n";
